use contracts::domain::a008_special_date::{SpecialDate, SpecialDatePayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::form_schema::{FieldKind, FieldSpec, FormValues, ValidationRules};

use super::api;
use crate::shared::date_utils::format_date;
use crate::shared::resource_manager::{require_id, Column, ManagedResource, ResourceApi};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("date", "Date", FieldKind::Date).with_rules(ValidationRules::required()),
    FieldSpec::new("typeDayId", "Day type", FieldKind::Select("type_days"))
        .with_rules(ValidationRules::required()),
    FieldSpec::new("description", "Description", FieldKind::TextArea)
        .with_rules(ValidationRules::none().with_max_length(255))
        .with_placeholder("Lunar New Year"),
];

fn to_payload(values: &FormValues) -> Result<SpecialDatePayload, ApiError> {
    Ok(SpecialDatePayload {
        date: values.text("date").unwrap_or_default(),
        type_day_id: require_id(values, "typeDayId", "Day type")?,
        description: values.text("description"),
    })
}

/// Holidays and other dates priced with a day-type surcharge
#[derive(Clone, Copy, Debug, Default)]
pub struct SpecialDateResource;

impl ResourceApi for SpecialDateResource {
    type Entity = SpecialDate;

    async fn list(&self, _filter: Option<String>) -> Result<Vec<SpecialDate>, ApiError> {
        api::list_special_dates().await
    }

    async fn create(&self, values: &FormValues) -> Result<SpecialDate, ApiError> {
        api::create_special_date(&to_payload(values)?).await
    }

    async fn update(&self, id: RecordId, values: &FormValues) -> Result<SpecialDate, ApiError> {
        api::update_special_date(id, &to_payload(values)?).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        api::delete_special_date(id).await
    }
}

impl ManagedResource for SpecialDateResource {
    fn title(&self) -> &'static str {
        "Special dates"
    }

    fn singular(&self) -> &'static str {
        "Special date"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns(&self) -> Vec<Column<SpecialDate>> {
        vec![
            Column::new("Date", |d| format_date(&d.date)),
            Column::new("Day type", |d| d.type_day.as_ref().map(|t| t.name.clone()).unwrap_or_default()),
            Column::new("Description", |d| d.description.clone().unwrap_or_default()),
        ]
    }

    fn form_values(&self, item: &SpecialDate) -> FormValues {
        FormValues::new()
            .with("date", item.date.get(..10).unwrap_or(&item.date))
            .with(
                "typeDayId",
                item.type_day.as_ref().map(|t| t.id.to_string()).unwrap_or_default(),
            )
            .with("description", item.description.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_requires_day_type() {
        let values = FormValues::new().with("date", "2025-01-29");
        assert!(to_payload(&values).unwrap_err().is_validation());

        let payload = to_payload(&values.with("typeDayId", "2")).unwrap();
        assert_eq!(payload.type_day_id, 2);
        assert_eq!(payload.description, None);
    }
}
