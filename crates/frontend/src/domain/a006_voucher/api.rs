use contracts::domain::a006_voucher::{Voucher, VoucherPayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::ListPayload;

use crate::shared::http;

const BASE: &str = "/voucher";

pub async fn list_vouchers() -> Result<Vec<Voucher>, ApiError> {
    http::get::<ListPayload<Voucher>>(BASE)
        .await
        .map(ListPayload::into_items)
}

pub async fn create_voucher(payload: &VoucherPayload) -> Result<Voucher, ApiError> {
    http::post(BASE, payload).await
}

pub async fn update_voucher(id: RecordId, payload: &VoucherPayload) -> Result<Voucher, ApiError> {
    http::patch(&format!("{}/{}", BASE, id), payload).await
}

pub async fn delete_voucher(id: RecordId) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", BASE, id)).await
}
