mod info;
mod record;
mod role;

pub use info::*;
pub use record::*;
pub use role::*;

/// Documented capacity of a record service. Not enforced.
pub const MAX_RECORDS: usize = 100;

pub const DEFAULT_ROLE: &str = "user";

/// Position of a record in its service's insertion order.
pub type RecordId = u64;
