//! Form schema for the generic resource editor
//!
//! A resource describes its form once as a `&'static [FieldSpec]`; the editor
//! renders inputs from it and [`validate_form`] checks the values before any
//! request leaves the browser.
//!
//! ```rust,ignore
//! const FIELDS: &[FieldSpec] = &[
//!     FieldSpec::new("name", "Name", FieldKind::Text)
//!         .with_rules(ValidationRules::required().with_min_length(2)),
//!     FieldSpec::new("email", "Email", FieldKind::Email)
//!         .with_rules(ValidationRules::email()),
//! ];
//!
//! let errors = validate_form(FIELDS, &values, FormMode::Create);
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldKind;
pub use types::{validate_form, FieldErrors, FieldSpec, FormMode, FormValues};
pub use validation::ValidationRules;
