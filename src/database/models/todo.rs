use serde::Serialize;
use uuid::Uuid;

use crate::types::RecordId;

/// To-do record. `user_id` is the owning user's canonical identity; it is
/// absent only for records created through the unauthenticated store contract.
#[derive(Debug, Clone, Serialize)]
pub struct Todo {
    pub id: i64,
    #[serde(rename = "objectId")]
    pub object_id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Option<RecordId>,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Todo {
    /// Whether this record is addressed by the given identifier, in either form.
    pub fn matches(&self, id: &RecordId) -> bool {
        match id {
            RecordId::Serial(n) => self.id == *n,
            RecordId::Object(u) => self.object_id == *u,
        }
    }

    /// Ownership test used to scope reads and writes. A caller identity that
    /// does not equal the stored owner (including a missing owner) fails.
    pub fn owned_by(&self, caller: &RecordId) -> bool {
        self.user_id.as_ref() == Some(caller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(user_id: Option<RecordId>) -> Todo {
        Todo {
            id: 1,
            object_id: Uuid::new_v4(),
            user_id,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            completed: false,
        }
    }

    #[test]
    fn serializes_with_camel_case_owner() {
        let owner = RecordId::Serial(4);
        let value = serde_json::to_value(todo(Some(owner))).unwrap();
        assert_eq!(value["userId"], 4);
        assert_eq!(value["completed"], false);
        assert_eq!(value["title"], "Buy milk");
    }

    #[test]
    fn ownership_requires_exact_identity() {
        let owner = RecordId::Object(Uuid::new_v4());
        let record = todo(Some(owner));

        assert!(record.owned_by(&owner));
        assert!(!record.owned_by(&RecordId::Object(Uuid::new_v4())));
        assert!(!todo(None).owned_by(&owner));
    }
}
