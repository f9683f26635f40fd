use contracts::domain::common::{EntityRecord, RecordId};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::Paginated;
use contracts::shared::form_schema::{FieldErrors, FieldSpec, FormValues};

/// Backend operations of one resource.
///
/// Create and update receive the raw form values after validation passed;
/// the implementation builds its typed payload from them.
#[allow(async_fn_in_trait)]
pub trait ResourceApi {
    type Entity: EntityRecord + Clone + Send + Sync + 'static;

    /// `filter` is the text of the resource's filter input, if it has one
    async fn list(&self, filter: Option<String>) -> Result<Vec<Self::Entity>, ApiError>;

    /// One 1-based page of the list. Lists the backend does not page come
    /// back whole from [`ResourceApi::list`].
    async fn list_page(
        &self,
        filter: Option<String>,
        _page: u64,
    ) -> Result<Paginated<Self::Entity>, ApiError> {
        self.list(filter).await.map(Paginated::whole)
    }

    async fn create(&self, _values: &FormValues) -> Result<Self::Entity, ApiError> {
        Err(read_only_error())
    }

    async fn update(&self, _id: RecordId, _values: &FormValues) -> Result<Self::Entity, ApiError> {
        Err(read_only_error())
    }

    async fn delete(&self, _id: RecordId) -> Result<(), ApiError> {
        Err(read_only_error())
    }
}

fn read_only_error() -> ApiError {
    ApiError::Http {
        status: 405,
        message: "This list is read-only".to_string(),
    }
}

/// Table column: header plus cell text
pub struct Column<E> {
    pub header: &'static str,
    pub value: fn(&E) -> String,
}

impl<E> Clone for Column<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Column<E> {}

impl<E> Column<E> {
    pub const fn new(header: &'static str, value: fn(&E) -> String) -> Self {
        Self { header, value }
    }
}

/// Everything the generic CRUD page needs to know about a resource
pub trait ManagedResource: ResourceApi + Copy + Send + Sync + 'static {
    /// Page title, plural
    fn title(&self) -> &'static str;

    /// Used in buttons and toasts ("Room created")
    fn singular(&self) -> &'static str;

    /// Form schema; empty means the list is read-only
    fn fields(&self) -> &'static [FieldSpec] {
        &[]
    }

    fn columns(&self) -> Vec<Column<Self::Entity>>;

    /// Values that prefill the edit form
    fn form_values(&self, _entity: &Self::Entity) -> FormValues {
        FormValues::new()
    }

    /// Values that prefill the create form
    fn default_values(&self) -> FormValues {
        FormValues::new()
    }

    /// Optional single filter above the table (date, room, keyword)
    fn filter(&self) -> Option<FieldSpec> {
        None
    }

    fn editable(&self) -> bool {
        !self.fields().is_empty()
    }
}

/// Parse an id-valued field, reporting it like any other validation failure
pub fn require_id(values: &FormValues, field: &'static str, label: &str) -> Result<RecordId, ApiError> {
    values.i64(field).ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.insert(field, format!("{} is required", label));
        ApiError::Validation(errors)
    })
}

/// Parse a numeric field that validation already accepted
pub fn require_number(values: &FormValues, field: &'static str, label: &str) -> Result<f64, ApiError> {
    values.f64(field).ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.insert(field, format!("{} must be a number", label));
        ApiError::Validation(errors)
    })
}
