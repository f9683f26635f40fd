use contracts::domain::common::{EntityRecord, RecordId};
use contracts::shared::api_error::ApiError;
use contracts::shared::form_schema::{validate_form, FieldSpec, FormMode, FormValues};

use super::state::ResourceManagerState;
use super::traits::ResourceApi;

#[derive(Debug, Clone, PartialEq)]
pub enum Submitted<E> {
    Created(E),
    Updated(E),
}

/// Validate locally, then create or update.
///
/// A validation failure returns [`ApiError::Validation`] without touching the
/// backend.
pub async fn submit_form<A: ResourceApi>(
    api: &A,
    fields: &[FieldSpec],
    editing: Option<RecordId>,
    values: &FormValues,
) -> Result<Submitted<A::Entity>, ApiError> {
    let mode = if editing.is_some() {
        FormMode::Edit
    } else {
        FormMode::Create
    };
    let errors = validate_form(fields, values, mode);
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    match editing {
        Some(id) => api.update(id, values).await.map(Submitted::Updated),
        None => api.create(values).await.map(Submitted::Created),
    }
}

impl<E: EntityRecord + Clone> ResourceManagerState<E> {
    /// Splice the saved record into the list and close the form
    pub fn apply_submitted(&mut self, submitted: Submitted<E>) {
        match submitted {
            Submitted::Created(entity) => self.apply_created(entity),
            Submitted::Updated(entity) => self.apply_updated(entity),
        }
        self.close_form();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_branch::Branch;
    use contracts::shared::form_schema::{FieldKind, ValidationRules};
    use futures::executor::block_on;
    use std::cell::Cell;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::new("name", "Name", FieldKind::Text)
            .with_rules(ValidationRules::required().with_min_length(3)),
        FieldSpec::new("address", "Address", FieldKind::TextArea).with_rules(ValidationRules::required()),
    ];

    #[derive(Default)]
    struct FakeBranches {
        creates: Cell<usize>,
        updates: Cell<usize>,
    }

    fn branch(id: RecordId, values: &FormValues) -> Branch {
        Branch {
            id,
            name: values.get("name").to_string(),
            address: values.get("address").to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    impl ResourceApi for FakeBranches {
        type Entity = Branch;

        async fn list(&self, _filter: Option<String>) -> Result<Vec<Branch>, ApiError> {
            Ok(Vec::new())
        }

        async fn create(&self, values: &FormValues) -> Result<Branch, ApiError> {
            self.creates.set(self.creates.get() + 1);
            Ok(branch(10, values))
        }

        async fn update(&self, id: RecordId, values: &FormValues) -> Result<Branch, ApiError> {
            self.updates.set(self.updates.get() + 1);
            Ok(branch(id, values))
        }
    }

    #[test]
    fn test_blank_required_field_blocks_request() {
        let api = FakeBranches::default();
        let values = FormValues::new().with("name", "Cinema Star");

        let result = block_on(submit_form(&api, FIELDS, None, &values));

        match result {
            Err(ApiError::Validation(errors)) => {
                assert_eq!(errors.get("address"), Some("Address is required"));
                assert_eq!(errors.len(), 1);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(api.creates.get(), 0);
        assert_eq!(api.updates.get(), 0);
    }

    #[test]
    fn test_blank_field_on_edit_blocks_update() {
        let api = FakeBranches::default();
        let values = FormValues::new().with("name", "").with("address", "12 Le Loi");

        let mut state: ResourceManagerState<Branch> = ResourceManagerState::default();
        let result = block_on(submit_form(&api, FIELDS, Some(4), &values));
        if let Err(e) = &result {
            state.apply_error(e);
        }

        assert_eq!(state.errors.get("name"), Some("Name is required"));
        assert_eq!(api.updates.get(), 0);
    }

    #[test]
    fn test_valid_create_and_update() {
        let api = FakeBranches::default();
        let values = FormValues::new()
            .with("name", "Cinema Star")
            .with("address", "12 Le Loi");

        let mut state: ResourceManagerState<Branch> = ResourceManagerState::default();
        state.set_items(vec![branch(4, &FormValues::new().with("name", "Old"))]);
        state.open_create(FormValues::new());

        let created = block_on(submit_form(&api, FIELDS, None, &values)).unwrap();
        assert!(matches!(created, Submitted::Created(_)));
        state.apply_submitted(created);
        assert_eq!(state.items.len(), 2);
        assert!(!state.form_visible);

        let updated = block_on(submit_form(&api, FIELDS, Some(4), &values)).unwrap();
        state.apply_submitted(updated);
        assert_eq!(state.items[0].name, "Cinema Star");
        assert_eq!(api.creates.get(), 1);
        assert_eq!(api.updates.get(), 1);
    }
}
