use contracts::domain::a003_seat::{Seat, SeatPayload, TypeSeat};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ListPayload;

use crate::shared::http;

const BASE: &str = "/seats";

pub async fn list_seats() -> Result<Vec<Seat>, ApiError> {
    http::get::<ListPayload<Seat>>(BASE)
        .await
        .map(ListPayload::into_items)
}

pub async fn list_seats_by_room(room_id: RecordId) -> Result<Vec<Seat>, ApiError> {
    http::get::<ListPayload<Seat>>(&format!("{}/room/{}", BASE, room_id))
        .await
        .map(ListPayload::into_items)
}

pub async fn create_seat(payload: &SeatPayload) -> Result<Seat, ApiError> {
    http::post(BASE, payload).await
}

pub async fn update_seat(id: RecordId, payload: &SeatPayload) -> Result<Seat, ApiError> {
    http::patch(&format!("{}/{}", BASE, id), payload).await
}

pub async fn delete_seat(id: RecordId) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", BASE, id)).await
}

pub async fn list_type_seats() -> Result<Vec<TypeSeat>, ApiError> {
    http::get::<ListPayload<TypeSeat>>("/type-seats")
        .await
        .map(ListPayload::into_items)
}
