use contracts::domain::a009_type_day::{TypeDay, TypeDayPayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::form_schema::{FieldKind, FieldSpec, FormValues, ValidationRules};

use super::api;
use crate::shared::date_utils::format_money;
use crate::shared::resource_manager::{require_number, Column, ManagedResource, ResourceApi};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text)
        .with_rules(ValidationRules::required().with_max_length(50))
        .with_placeholder("Weekend"),
    FieldSpec::new("surcharge", "Surcharge (VND)", FieldKind::Number)
        .with_rules(ValidationRules::required().with_range(Some(0.0), None)),
];

fn to_payload(values: &FormValues) -> Result<TypeDayPayload, ApiError> {
    Ok(TypeDayPayload {
        name: values.text("name").unwrap_or_default(),
        surcharge: require_number(values, "surcharge", "Surcharge")?,
    })
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TypeDayResource;

impl ResourceApi for TypeDayResource {
    type Entity = TypeDay;

    async fn list(&self, _filter: Option<String>) -> Result<Vec<TypeDay>, ApiError> {
        api::list_type_days().await
    }

    async fn create(&self, values: &FormValues) -> Result<TypeDay, ApiError> {
        api::create_type_day(&to_payload(values)?).await
    }

    async fn update(&self, id: RecordId, values: &FormValues) -> Result<TypeDay, ApiError> {
        api::update_type_day(id, &to_payload(values)?).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        api::delete_type_day(id).await
    }
}

impl ManagedResource for TypeDayResource {
    fn title(&self) -> &'static str {
        "Day types"
    }

    fn singular(&self) -> &'static str {
        "Day type"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns(&self) -> Vec<Column<TypeDay>> {
        vec![
            Column::new("ID", |t| t.id.to_string()),
            Column::new("Name", |t| t.name.clone()),
            Column::new("Surcharge", |t| format_money(t.surcharge)),
        ]
    }

    fn form_values(&self, item: &TypeDay) -> FormValues {
        FormValues::new()
            .with("name", item.name.clone())
            .with("surcharge", item.surcharge.to_string())
    }

    fn default_values(&self) -> FormValues {
        FormValues::new().with("surcharge", "0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::form_schema::{validate_form, FormMode};

    #[test]
    fn test_negative_surcharge_rejected() {
        let values = FormValues::new().with("name", "Holiday").with("surcharge", "-5000");
        let errors = validate_form(FIELDS, &values, FormMode::Create);
        assert_eq!(errors.get("surcharge"), Some("Surcharge (VND) must be at least 0"));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(TypeDayResource.default_values().get("surcharge"), "0");
        let payload = to_payload(&TypeDayResource.default_values().with("name", "Weekday")).unwrap();
        assert_eq!(payload.surcharge, 0.0);
    }
}
