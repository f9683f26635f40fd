use contracts::domain::a001_branch::{Branch, BranchPayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::form_schema::{FieldKind, FieldSpec, FormValues, ValidationRules};

use super::api;
use crate::shared::date_utils::format_date;
use crate::shared::resource_manager::{Column, ManagedResource, ResourceApi};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text)
        .with_rules(ValidationRules::required().with_min_length(3).with_max_length(100))
        .with_placeholder("Cinema Star Hai Ba Trung"),
    FieldSpec::new("address", "Address", FieldKind::TextArea)
        .with_rules(ValidationRules::required().with_max_length(255)),
];

fn to_payload(values: &FormValues) -> BranchPayload {
    BranchPayload {
        name: values.text("name").unwrap_or_default(),
        address: values.text("address").unwrap_or_default(),
    }
}

/// Cinema branches, managed by the super admin
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchResource;

impl ResourceApi for BranchResource {
    type Entity = Branch;

    async fn list(&self, _filter: Option<String>) -> Result<Vec<Branch>, ApiError> {
        api::list_branches().await
    }

    async fn create(&self, values: &FormValues) -> Result<Branch, ApiError> {
        api::create_branch(&to_payload(values)).await
    }

    async fn update(&self, id: RecordId, values: &FormValues) -> Result<Branch, ApiError> {
        api::update_branch(id, &to_payload(values)).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        api::delete_branch(id).await
    }
}

impl ManagedResource for BranchResource {
    fn title(&self) -> &'static str {
        "Branches"
    }

    fn singular(&self) -> &'static str {
        "Branch"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn columns(&self) -> Vec<Column<Branch>> {
        vec![
            Column::new("ID", |b| b.id.to_string()),
            Column::new("Name", |b| b.name.clone()),
            Column::new("Address", |b| b.address.clone()),
            Column::new("Created", |b| {
                b.created_at.as_deref().map(format_date).unwrap_or_default()
            }),
        ]
    }

    fn form_values(&self, branch: &Branch) -> FormValues {
        FormValues::new()
            .with("name", branch.name.clone())
            .with("address", branch.address.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_trimmed() {
        let values = FormValues::new()
            .with("name", "  Cinema Star  ")
            .with("address", "12 Le Loi, District 1 ");
        let payload = to_payload(&values);
        assert_eq!(payload.name, "Cinema Star");
        assert_eq!(payload.address, "12 Le Loi, District 1");
    }

    #[test]
    fn test_edit_form_round_trips_entity() {
        let branch = Branch {
            id: 3,
            name: "Cinema Star".into(),
            address: "12 Le Loi".into(),
            created_at: Some("2024-01-05T08:00:00Z".into()),
            updated_at: None,
        };
        let values = BranchResource.form_values(&branch);
        assert_eq!(to_payload(&values).name, branch.name);
        assert_eq!(BranchResource.columns()[3].header, "Created");
        assert_eq!((BranchResource.columns()[3].value)(&branch), "05/01/2024");
    }
}
