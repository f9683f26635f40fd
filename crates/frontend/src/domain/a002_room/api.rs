use contracts::domain::a002_room::{Room, RoomPayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ListPayload;

use crate::shared::http;

const BASE: &str = "/rooms";

/// Every room of the chain
pub async fn list_rooms() -> Result<Vec<Room>, ApiError> {
    http::get::<ListPayload<Room>>(BASE)
        .await
        .map(ListPayload::into_items)
}

/// Rooms of the signed-in admin's branch, resolved by the backend from the token
pub async fn list_my_branch_rooms() -> Result<Vec<Room>, ApiError> {
    http::get::<ListPayload<Room>>(&format!("{}/my-branch", BASE))
        .await
        .map(ListPayload::into_items)
}

pub async fn create_room(payload: &RoomPayload) -> Result<Room, ApiError> {
    http::post(BASE, payload).await
}

pub async fn update_room(id: RecordId, payload: &RoomPayload) -> Result<Room, ApiError> {
    http::patch(&format!("{}/{}", BASE, id), payload).await
}

pub async fn delete_room(id: RecordId) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", BASE, id)).await
}
