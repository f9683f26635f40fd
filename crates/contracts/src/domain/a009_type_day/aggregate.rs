use crate::domain::common::{EntityRecord, RecordId};
use serde::{Deserialize, Serialize};

/// Day category (weekday, weekend, holiday) that drives ticket surcharges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDay {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub surcharge: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDayPayload {
    pub name: String,
    pub surcharge: f64,
}

impl EntityRecord for TypeDay {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}
