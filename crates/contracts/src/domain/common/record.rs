/// Backend primary key, every entity uses an integer id
pub type RecordId = i64;

/// Records managed by the generic resource editor
///
/// The client list is patched by `record_id` without reloading.
pub trait EntityRecord {
    /// Record ID
    fn record_id(&self) -> RecordId;

    /// Short name for confirmations and toasts
    fn display_name(&self) -> String;
}
