use serde::{Deserialize, Serialize};

/// Back-office role carried by a session. `Admin` unlocks the full editing
/// tooling; `Member` sees the same data with every mutating affordance
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn can_mutate(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// The authenticated user of the current session. Either fully populated or
/// absent as a whole; the credential password never reaches this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub name: String,
}
