use chrono::NaiveDate;
use contracts::domain::a006_voucher::{Voucher, VoucherPayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::form_schema::{FieldErrors, FieldKind, FieldSpec, FormValues, ValidationRules};

use super::api;
use crate::shared::date_utils::format_date;
use crate::shared::resource_manager::{require_number, Column, ManagedResource, ResourceApi};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("code", "Code", FieldKind::Text)
        .with_rules(
            ValidationRules::required()
                .with_min_length(4)
                .with_max_length(20)
                .with_pattern(r"^[A-Z0-9_-]+$", "Code may contain upper case letters, digits, - and _"),
        )
        .with_placeholder("SUMMER25"),
    FieldSpec::new("discount", "Discount (%)", FieldKind::Number)
        .with_rules(ValidationRules::required().with_range(Some(1.0), Some(100.0))),
    FieldSpec::new("quantity", "Quantity", FieldKind::Number)
        .with_rules(ValidationRules::required().with_range(Some(1.0), None)),
    FieldSpec::new("startDate", "Start date", FieldKind::Date).with_rules(ValidationRules::required()),
    FieldSpec::new("endDate", "End date", FieldKind::Date).with_rules(ValidationRules::required()),
    FieldSpec::new("description", "Description", FieldKind::TextArea)
        .with_rules(ValidationRules::none().with_max_length(500)),
];

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

fn to_payload(values: &FormValues) -> Result<VoucherPayload, ApiError> {
    let start_date = values.text("startDate").unwrap_or_default();
    let end_date = values.text("endDate").unwrap_or_default();

    // end before start is a field error, same as a blank field
    if let (Some(start), Some(end)) = (parse_date(&start_date), parse_date(&end_date)) {
        if end < start {
            let mut errors = FieldErrors::new();
            errors.insert("endDate", "End date must not be before start date".to_string());
            return Err(ApiError::Validation(errors));
        }
    }

    Ok(VoucherPayload {
        code: values.text("code").unwrap_or_default(),
        discount: require_number(values, "discount", "Discount")?,
        quantity: require_number(values, "quantity", "Quantity")?.round() as i64,
        start_date,
        end_date,
        description: values.text("description"),
    })
}

#[derive(Clone, Copy, Debug, Default)]
pub struct VoucherResource;

impl ResourceApi for VoucherResource {
    type Entity = Voucher;

    async fn list(&self, _filter: Option<String>) -> Result<Vec<Voucher>, ApiError> {
        api::list_vouchers().await
    }

    async fn create(&self, values: &FormValues) -> Result<Voucher, ApiError> {
        api::create_voucher(&to_payload(values)?).await
    }

    async fn update(&self, id: RecordId, values: &FormValues) -> Result<Voucher, ApiError> {
        api::update_voucher(id, &to_payload(values)?).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        api::delete_voucher(id).await
    }
}

impl ManagedResource for VoucherResource {
    fn title(&self) -> &'static str {
        "Vouchers"
    }

    fn singular(&self) -> &'static str {
        "Voucher"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns(&self) -> Vec<Column<Voucher>> {
        vec![
            Column::new("Code", |v| v.code.clone()),
            Column::new("Discount", |v| format!("{}%", v.discount)),
            Column::new("Quantity", |v| v.quantity.to_string()),
            Column::new("Valid from", |v| v.start_date.as_deref().map(format_date).unwrap_or_default()),
            Column::new("Valid to", |v| v.end_date.as_deref().map(format_date).unwrap_or_default()),
        ]
    }

    fn form_values(&self, voucher: &Voucher) -> FormValues {
        let date = |d: &Option<String>| d.as_deref().and_then(|d| d.get(..10)).unwrap_or("").to_string();
        FormValues::new()
            .with("code", voucher.code.clone())
            .with("discount", voucher.discount.to_string())
            .with("quantity", voucher.quantity.to_string())
            .with("startDate", date(&voucher.start_date))
            .with("endDate", date(&voucher.end_date))
            .with("description", voucher.description.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> FormValues {
        FormValues::new()
            .with("code", "SUMMER25")
            .with("discount", "25")
            .with("quantity", "100")
            .with("startDate", "2024-06-01")
            .with("endDate", "2024-08-31")
    }

    #[test]
    fn test_payload() {
        let payload = to_payload(&values()).unwrap();
        assert_eq!(payload.discount, 25.0);
        assert_eq!(payload.quantity, 100);
        assert_eq!(payload.description, None);
    }

    #[test]
    fn test_end_before_start_rejected() {
        let err = to_payload(&values().with("endDate", "2024-05-01")).unwrap_err();
        match err {
            ApiError::Validation(errors) => {
                assert_eq!(errors.get("endDate"), Some("End date must not be before start date"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
