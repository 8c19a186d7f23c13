use serde::Serialize;
use uuid::Uuid;

use crate::types::RecordId;

/// User account record.
///
/// The password hash never leaves the process: it is skipped during
/// serialization, so every returned representation is already stripped.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "objectId")]
    pub object_id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Canonical identity embedded in tokens and recorded as todo ownership.
    pub fn identity(&self) -> RecordId {
        RecordId::Object(self.object_id)
    }

    /// Whether this record is addressed by the given identifier, in either form.
    pub fn matches(&self, id: &RecordId) -> bool {
        match id {
            RecordId::Serial(n) => self.id == *n,
            RecordId::Object(u) => self.object_id == *u,
        }
    }
}
