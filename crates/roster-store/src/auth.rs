/// Something that can vouch for a caller-supplied token.
pub trait Authenticatable {
    fn authenticate(&self, token: &str) -> bool;
}
