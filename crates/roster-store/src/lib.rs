mod auth;
mod service;
mod validate;

pub use auth::Authenticatable;
pub use service::RecordService;
pub use validate::{validate_record, ValidationError};
