use contracts::domain::a001_branch::{Branch, BranchPayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ListPayload;

use crate::shared::http;

const BASE: &str = "/branches";

pub async fn list_branches() -> Result<Vec<Branch>, ApiError> {
    http::get::<ListPayload<Branch>>(BASE)
        .await
        .map(ListPayload::into_items)
}

pub async fn create_branch(payload: &BranchPayload) -> Result<Branch, ApiError> {
    http::post(BASE, payload).await
}

pub async fn update_branch(id: RecordId, payload: &BranchPayload) -> Result<Branch, ApiError> {
    http::patch(&format!("{}/{}", BASE, id), payload).await
}

pub async fn delete_branch(id: RecordId) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", BASE, id)).await
}
