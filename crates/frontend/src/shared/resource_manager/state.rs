use contracts::domain::common::{EntityRecord, RecordId};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::{PageMeta, Paginated};
use contracts::shared::form_schema::{FieldErrors, FormMode, FormValues};
use contracts::shared::pagination::total_pages;
use contracts::shared::request_generation::{RequestGeneration, RequestTicket};

/// Local state of a resource page.
///
/// The list is a transient copy: successful mutations splice it in place
/// instead of reloading.
#[derive(Clone, Debug)]
pub struct ResourceManagerState<E> {
    pub items: Vec<E>,
    pub is_loaded: bool,
    pub loading: bool,
    pub form_visible: bool,
    pub editing: Option<E>,
    pub values: FormValues,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub filter: String,
    /// 1-based page of a paged list
    pub page: u64,
    pub meta: PageMeta,
    generation: RequestGeneration,
}

impl<E> Default for ResourceManagerState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loaded: false,
            loading: false,
            form_visible: false,
            editing: None,
            values: FormValues::new(),
            errors: FieldErrors::new(),
            submitting: false,
            filter: String::new(),
            page: 1,
            meta: PageMeta::default(),
            generation: RequestGeneration::new(),
        }
    }
}

impl<E: EntityRecord + Clone> ResourceManagerState<E> {
    pub fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        self.editing.as_ref().map(|e| e.record_id())
    }

    pub fn open_create(&mut self, defaults: FormValues) {
        self.form_visible = true;
        self.editing = None;
        self.values = defaults;
        self.errors = FieldErrors::new();
    }

    pub fn open_edit(&mut self, entity: E, values: FormValues) {
        self.form_visible = true;
        self.editing = Some(entity);
        self.values = values;
        self.errors = FieldErrors::new();
    }

    pub fn close_form(&mut self) {
        self.form_visible = false;
        self.editing = None;
        self.values = FormValues::new();
        self.errors = FieldErrors::new();
        self.submitting = false;
    }

    /// Store typed input; a field's error clears as soon as it is edited
    pub fn set_value(&mut self, name: &'static str, value: String) {
        self.values.set(name, value);
        self.errors.remove(name);
    }

    /// Start a list load; a response for an older ticket will be ignored
    pub fn begin_load(&mut self) -> RequestTicket {
        self.loading = true;
        self.generation.issue()
    }

    /// Returns false when the response belongs to a superseded load
    pub fn finish_load(&mut self, ticket: RequestTicket, page: Option<Paginated<E>>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        match page {
            Some(page) => {
                self.meta = page.meta;
                self.set_items(page.items);
            }
            None => self.loading = false,
        }
        true
    }

    /// Filter text as sent to the list call, `None` when blank
    pub fn filter_value(&self) -> Option<String> {
        let filter = self.filter.trim();
        (!filter.is_empty()).then(|| filter.to_string())
    }

    /// New filter text; a paged list starts over from page 1
    pub fn set_filter(&mut self, value: String) {
        self.filter = value;
        self.page = 1;
    }

    /// The loaded list came back unpaged
    fn is_whole(&self) -> bool {
        self.meta.offset == 0 && self.meta.limit == self.meta.total
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.meta.total, self.meta.limit)
    }

    /// Rows the backend holds for the current filter
    pub fn total(&self) -> u64 {
        self.meta.total.max(self.items.len() as u64)
    }

    /// "Showing 21-40 of 57" when the table holds only part of the list
    pub fn partial_note(&self) -> Option<String> {
        if self.items.is_empty() || self.meta.total <= self.items.len() as u64 {
            return None;
        }
        let first = self.meta.offset + 1;
        let last = self.meta.offset + self.items.len() as u64;
        Some(format!("Showing {}-{} of {}", first, last, self.meta.total))
    }

    pub fn set_items(&mut self, items: Vec<E>) {
        self.items = items;
        self.is_loaded = true;
        self.loading = false;
    }

    pub fn apply_created(&mut self, entity: E) {
        self.items.push(entity);
        if self.is_whole() {
            self.meta.limit += 1;
        }
        self.meta.total += 1;
    }

    pub fn apply_updated(&mut self, entity: E) {
        let id = entity.record_id();
        if let Some(slot) = self.items.iter_mut().find(|e| e.record_id() == id) {
            *slot = entity;
        }
    }

    pub fn apply_deleted(&mut self, id: RecordId) {
        let before = self.items.len();
        self.items.retain(|e| e.record_id() != id);
        if self.items.len() < before {
            if self.is_whole() {
                self.meta.limit = self.meta.limit.saturating_sub(1);
            }
            self.meta.total = self.meta.total.saturating_sub(1);
        }
    }

    /// Keep validation messages next to the inputs; other errors go to a toast
    pub fn apply_error(&mut self, error: &ApiError) {
        self.submitting = false;
        if let ApiError::Validation(errors) = error {
            self.errors = errors.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Hall {
        id: RecordId,
        name: &'static str,
    }

    impl EntityRecord for Hall {
        fn record_id(&self) -> RecordId {
            self.id
        }

        fn display_name(&self) -> String {
            self.name.to_string()
        }
    }

    fn state_with(items: Vec<Hall>) -> ResourceManagerState<Hall> {
        let mut state = ResourceManagerState::default();
        state.set_items(items);
        state
    }

    #[test]
    fn test_splice_operations() {
        let mut state = state_with(vec![Hall { id: 1, name: "A" }, Hall { id: 2, name: "B" }]);

        state.apply_created(Hall { id: 3, name: "C" });
        assert_eq!(state.items.len(), 3);

        state.apply_updated(Hall { id: 2, name: "B2" });
        assert_eq!(state.items[1].name, "B2");

        state.apply_deleted(1);
        let ids: Vec<RecordId> = state.items.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_update_of_unknown_id_is_ignored() {
        let mut state = state_with(vec![Hall { id: 1, name: "A" }]);
        state.apply_updated(Hall { id: 9, name: "Z" });
        assert_eq!(state.items, vec![Hall { id: 1, name: "A" }]);
    }

    #[test]
    fn test_superseded_load_is_ignored() {
        let mut state: ResourceManagerState<Hall> = ResourceManagerState::default();
        let all = state.begin_load();
        state.filter = " 2 ".into();
        let filtered = state.begin_load();
        assert_eq!(state.filter_value().as_deref(), Some("2"));

        assert!(state.finish_load(filtered, Some(Paginated::whole(vec![Hall { id: 2, name: "B" }]))));
        assert!(!state.finish_load(
            all,
            Some(Paginated::whole(vec![Hall { id: 1, name: "A" }, Hall { id: 2, name: "B" }]))
        ));
        assert_eq!(state.items.len(), 1);
        assert!(!state.loading);
    }

    #[test]
    fn test_partial_page_is_reported() {
        let mut state: ResourceManagerState<Hall> = ResourceManagerState::default();
        state.set_filter("hall".into());
        state.page = 2;
        let ticket = state.begin_load();
        let page = Paginated {
            items: vec![Hall { id: 21, name: "U" }, Hall { id: 22, name: "V" }],
            meta: PageMeta {
                total: 57,
                limit: 20,
                offset: 20,
            },
        };
        assert!(state.finish_load(ticket, Some(page)));

        assert_eq!(state.total(), 57);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.partial_note().as_deref(), Some("Showing 21-22 of 57"));

        state.set_filter("hall b".into());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_whole_list_has_no_note() {
        let mut state: ResourceManagerState<Hall> = ResourceManagerState::default();
        let ticket = state.begin_load();
        state.finish_load(ticket, Some(Paginated::whole(vec![Hall { id: 1, name: "A" }])));
        assert_eq!(state.partial_note(), None);
        assert_eq!(state.total_pages(), 1);

        state.apply_created(Hall { id: 2, name: "B" });
        assert_eq!(state.total(), 2);
        assert_eq!(state.total_pages(), 1);
        state.apply_deleted(1);
        state.apply_deleted(1);
        assert_eq!(state.total(), 1);
        assert_eq!(state.partial_note(), None);
    }

    #[test]
    fn test_failed_load_keeps_items() {
        let mut state = state_with(vec![Hall { id: 1, name: "A" }]);
        let ticket = state.begin_load();
        assert!(state.finish_load(ticket, None));
        assert_eq!(state.items.len(), 1);
        assert!(!state.loading);
    }

    #[test]
    fn test_form_lifecycle() {
        let mut state = state_with(vec![Hall { id: 1, name: "A" }]);
        state.open_edit(Hall { id: 1, name: "A" }, FormValues::new().with("name", "A"));
        assert_eq!(state.mode(), FormMode::Edit);
        assert_eq!(state.editing_id(), Some(1));

        let mut errors = FieldErrors::new();
        errors.insert("name", "Name is required".into());
        state.apply_error(&ApiError::Validation(errors));
        assert_eq!(state.errors.get("name"), Some("Name is required"));

        state.set_value("name", "Hall A".into());
        assert!(state.errors.is_empty());

        state.close_form();
        assert!(!state.form_visible);
        assert_eq!(state.mode(), FormMode::Create);
    }

    #[test]
    fn test_non_validation_error_keeps_field_errors_empty() {
        let mut state: ResourceManagerState<Hall> = ResourceManagerState::default();
        state.submitting = true;
        state.apply_error(&ApiError::Network("offline".into()));
        assert!(state.errors.is_empty());
        assert!(!state.submitting);
    }
}
