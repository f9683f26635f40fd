//! Common types and traits for all cinema entities

pub mod record;

pub use record::{EntityRecord, RecordId};
