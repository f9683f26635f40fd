use crate::domain::common::{EntityRecord, RecordId};
use serde::{Deserialize, Serialize};

/// Physical cinema of the chain; owns rooms and staff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchPayload {
    pub name: String,
    pub address: String,
}

impl EntityRecord for Branch {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}
