use contracts::domain::a009_type_day::{TypeDay, TypeDayPayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ListPayload;

use crate::shared::http;

const BASE: &str = "/type-day";

pub async fn list_type_days() -> Result<Vec<TypeDay>, ApiError> {
    http::get::<ListPayload<TypeDay>>(BASE)
        .await
        .map(ListPayload::into_items)
}

pub async fn create_type_day(payload: &TypeDayPayload) -> Result<TypeDay, ApiError> {
    http::post(BASE, payload).await
}

pub async fn update_type_day(id: RecordId, payload: &TypeDayPayload) -> Result<TypeDay, ApiError> {
    http::patch(&format!("{}/{}", BASE, id), payload).await
}

pub async fn delete_type_day(id: RecordId) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", BASE, id)).await
}
