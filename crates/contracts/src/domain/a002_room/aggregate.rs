use crate::domain::a001_branch::Branch;
use crate::domain::common::{EntityRecord, RecordId};
use serde::{Deserialize, Serialize};

/// Screening room, belongs to one branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub branch_id: Option<RecordId>,
    /// Present when the backend joins the branch
    #[serde(default)]
    pub branch: Option<Branch>,
}

impl Room {
    /// Branch id from either the flat column or the joined relation
    pub fn owner_branch_id(&self) -> Option<RecordId> {
        self.branch_id.or_else(|| self.branch.as_ref().map(|b| b.id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<RecordId>,
}

impl EntityRecord for Room {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_branch_from_relation() {
        let json = r#"{"id":3,"name":"Hall 3","branch":{"id":2,"name":"District 1"}}"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.owner_branch_id(), Some(2));
    }
}
