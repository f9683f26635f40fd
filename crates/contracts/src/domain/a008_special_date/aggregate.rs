use crate::domain::a009_type_day::TypeDay;
use crate::domain::common::{EntityRecord, RecordId};
use serde::{Deserialize, Serialize};

/// Calendar date priced with a non-default day type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialDate {
    pub id: RecordId,
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub type_day: Option<TypeDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialDatePayload {
    pub date: String,
    pub type_day_id: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EntityRecord for SpecialDate {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.date.clone()
    }
}
