use contracts::domain::a007_refreshment::{Refreshment, RefreshmentPayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ListPayload;

use crate::shared::http;

const BASE: &str = "/refreshments";

pub async fn list_refreshments() -> Result<Vec<Refreshment>, ApiError> {
    http::get::<ListPayload<Refreshment>>(BASE)
        .await
        .map(ListPayload::into_items)
}

pub async fn create_refreshment(payload: &RefreshmentPayload) -> Result<Refreshment, ApiError> {
    http::post(BASE, payload).await
}

pub async fn update_refreshment(id: RecordId, payload: &RefreshmentPayload) -> Result<Refreshment, ApiError> {
    http::patch(&format!("{}/{}", BASE, id), payload).await
}

pub async fn delete_refreshment(id: RecordId) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", BASE, id)).await
}
