use contracts::domain::a004_showtime::{ShowTime, ShowTimePayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ListPayload;

use crate::shared::api_utils::segment;
use crate::shared::http;

const BASE: &str = "/show-time";

pub async fn list_showtimes() -> Result<Vec<ShowTime>, ApiError> {
    http::get::<ListPayload<ShowTime>>(BASE)
        .await
        .map(ListPayload::into_items)
}

/// `date` is `YYYY-MM-DD`
pub async fn list_showtimes_by_date(date: &str) -> Result<Vec<ShowTime>, ApiError> {
    http::get::<ListPayload<ShowTime>>(&format!("{}/show-date/{}", BASE, segment(date)))
        .await
        .map(ListPayload::into_items)
}

pub async fn create_showtime(payload: &ShowTimePayload) -> Result<ShowTime, ApiError> {
    http::post(BASE, payload).await
}

pub async fn update_showtime(id: RecordId, payload: &ShowTimePayload) -> Result<ShowTime, ApiError> {
    http::patch(&format!("{}/{}", BASE, id), payload).await
}

pub async fn delete_showtime(id: RecordId) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", BASE, id)).await
}
