use crate::domain::common::{EntityRecord, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: RecordId,
    pub code: String,
    /// Percent, 0..=100
    pub discount: f64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherPayload {
    pub code: String,
    pub discount: f64,
    pub quantity: i64,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EntityRecord for Voucher {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.code.clone()
    }
}
