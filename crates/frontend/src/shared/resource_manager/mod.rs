//! Generic CRUD page
//!
//! A resource implements [`ManagedResource`] (field schema, columns and the
//! four backend calls) and gets a list page with a create/edit dialog,
//! client-side validation, delete confirmation and toasts.

pub mod form;
pub mod page;
pub mod state;
pub mod submit;
pub mod traits;

pub use page::ResourceManagerPage;
pub use state::ResourceManagerState;
pub use submit::{submit_form, Submitted};
pub use traits::{require_id, require_number, Column, ManagedResource, ResourceApi};
