use serde::{Deserialize, Serialize};

use crate::{Record, Role};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub records: usize,
    pub adults: usize,
    pub max_records: usize,
    pub default_role: Role,
    /// Fallback record reported for reference; never part of the service.
    pub placeholder: Record,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResult {
    pub authenticated: bool,
}
