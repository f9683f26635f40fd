use contracts::domain::a008_special_date::{SpecialDate, SpecialDatePayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ListPayload;

use crate::shared::http;

const BASE: &str = "/special-date";

pub async fn list_special_dates() -> Result<Vec<SpecialDate>, ApiError> {
    http::get::<ListPayload<SpecialDate>>(BASE)
        .await
        .map(ListPayload::into_items)
}

pub async fn create_special_date(payload: &SpecialDatePayload) -> Result<SpecialDate, ApiError> {
    http::post(BASE, payload).await
}

pub async fn update_special_date(id: RecordId, payload: &SpecialDatePayload) -> Result<SpecialDate, ApiError> {
    http::patch(&format!("{}/{}", BASE, id), payload).await
}

pub async fn delete_special_date(id: RecordId) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", BASE, id)).await
}
