use contracts::domain::a007_refreshment::{Refreshment, RefreshmentPayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::form_schema::{FieldKind, FieldSpec, FormValues, ValidationRules};

use super::api;
use crate::shared::date_utils::format_money;
use crate::shared::resource_manager::{require_number, Column, ManagedResource, ResourceApi};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text)
        .with_rules(ValidationRules::required().with_max_length(100))
        .with_placeholder("Combo popcorn + coke"),
    FieldSpec::new("price", "Price (VND)", FieldKind::Number)
        .with_rules(ValidationRules::required().with_range(Some(0.0), None)),
    FieldSpec::new("image", "Image URL", FieldKind::Text).with_rules(
        ValidationRules::none().with_pattern(r"^https?://\S+$", "Image must be an http(s) URL"),
    ),
];

fn to_payload(values: &FormValues) -> Result<RefreshmentPayload, ApiError> {
    Ok(RefreshmentPayload {
        name: values.text("name").unwrap_or_default(),
        price: require_number(values, "price", "Price")?,
        image: values.text("image"),
    })
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RefreshmentResource;

impl ResourceApi for RefreshmentResource {
    type Entity = Refreshment;

    async fn list(&self, _filter: Option<String>) -> Result<Vec<Refreshment>, ApiError> {
        api::list_refreshments().await
    }

    async fn create(&self, values: &FormValues) -> Result<Refreshment, ApiError> {
        api::create_refreshment(&to_payload(values)?).await
    }

    async fn update(&self, id: RecordId, values: &FormValues) -> Result<Refreshment, ApiError> {
        api::update_refreshment(id, &to_payload(values)?).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        api::delete_refreshment(id).await
    }
}

impl ManagedResource for RefreshmentResource {
    fn title(&self) -> &'static str {
        "Refreshments"
    }

    fn singular(&self) -> &'static str {
        "Refreshment"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns(&self) -> Vec<Column<Refreshment>> {
        vec![
            Column::new("ID", |r| r.id.to_string()),
            Column::new("Name", |r| r.name.clone()),
            Column::new("Price", |r| format_money(r.price)),
        ]
    }

    fn form_values(&self, item: &Refreshment) -> FormValues {
        FormValues::new()
            .with("name", item.name.clone())
            .with("price", item.price.to_string())
            .with("image", item.image.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::form_schema::{validate_form, FormMode};

    #[test]
    fn test_optional_image_checked_only_when_given() {
        let base = FormValues::new().with("name", "Popcorn").with("price", "45000");
        assert!(validate_form(FIELDS, &base, FormMode::Create).is_empty());
        let errors = validate_form(FIELDS, &base.clone().with("image", "popcorn.png"), FormMode::Create);
        assert_eq!(errors.get("image"), Some("Image must be an http(s) URL"));

        let payload = to_payload(&base).unwrap();
        assert_eq!(payload.price, 45000.0);
        assert_eq!(payload.image, None);
    }
}
