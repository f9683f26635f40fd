use super::field_type::FieldKind;
use super::validation::ValidationRules;
use std::collections::BTreeMap;

/// Whether the editor is creating a new record or changing an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Description of a single form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub validation: ValidationRules,
    pub placeholder: Option<&'static str>,
    /// Shown (and validated) only while creating, e.g. initial password
    pub create_only: bool,
    /// Shown only while editing, e.g. account status
    pub edit_only: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            validation: ValidationRules::none(),
            placeholder: None,
            create_only: false,
            edit_only: false,
        }
    }

    pub const fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.validation = rules;
        self
    }

    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub const fn create_only(mut self) -> Self {
        self.create_only = true;
        self
    }

    pub const fn edit_only(mut self) -> Self {
        self.edit_only = true;
        self
    }

    pub fn visible_in(&self, mode: FormMode) -> bool {
        match mode {
            FormMode::Create => !self.edit_only,
            FormMode::Edit => !self.create_only,
        }
    }

    /// Validate one raw value, numeric kinds are parsed first
    pub fn check(&self, raw: &str) -> Result<(), String> {
        self.validation.validate_string(raw, self.label)?;
        if self.kind.is_numeric() && !raw.trim().is_empty() {
            let number: f64 = raw
                .trim()
                .parse()
                .map_err(|_| format!("{} must be a number", self.label))?;
            if !number.is_finite() {
                return Err(format!("{} must be a number", self.label));
            }
            self.validation.validate_number(number, self.label)?;
        }
        Ok(())
    }
}

/// Raw text of every input, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.insert(name, value.into());
    }

    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Trimmed value, `None` when blank
    pub fn text(&self, name: &str) -> Option<String> {
        let value = self.get(name).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn i64(&self, name: &str) -> Option<i64> {
        self.get(name).trim().parse().ok()
    }

    pub fn f64(&self, name: &str) -> Option<f64> {
        self.get(name).trim().parse().ok()
    }
}

/// Validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, message: String) {
        self.0.insert(name, message);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) {
        self.0.remove(name);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&&'static str, &String)> {
        self.0.iter()
    }
}

/// Check every visible field and collect the first failure of each
pub fn validate_form(fields: &[FieldSpec], values: &FormValues, mode: FormMode) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in fields.iter().filter(|f| f.visible_in(mode)) {
        if let Err(message) = field.check(values.get(field.name)) {
            errors.insert(field.name, message);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::new("fullName", "Full name", FieldKind::Text)
            .with_rules(ValidationRules::required().with_min_length(3)),
        FieldSpec::new("email", "Email", FieldKind::Email).with_rules(ValidationRules::email()),
        FieldSpec::new("password", "Password", FieldKind::Password)
            .with_rules(ValidationRules::required().with_min_length(6))
            .create_only(),
        FieldSpec::new("quantity", "Quantity", FieldKind::Number)
            .with_rules(ValidationRules::none().with_range(Some(1.0), None)),
    ];

    #[test]
    fn test_blank_required_field_reported() {
        let values = FormValues::new()
            .with("email", "staff@cinema.vn")
            .with("password", "secret1");
        let errors = validate_form(FIELDS, &values, FormMode::Create);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("fullName"), Some("Full name is required"));
    }

    #[test]
    fn test_create_only_fields_skipped_on_edit() {
        let values = FormValues::new()
            .with("fullName", "Nguyen Van A")
            .with("email", "a@cinema.vn");
        assert_eq!(validate_form(FIELDS, &values, FormMode::Create).len(), 1);
        assert!(validate_form(FIELDS, &values, FormMode::Edit).is_empty());
    }

    #[test]
    fn test_edit_only_field_hidden_on_create() {
        let status = FieldSpec::new("status", "Status", FieldKind::Select("account_status"))
            .with_rules(ValidationRules::required())
            .edit_only();
        assert!(!status.visible_in(FormMode::Create));
        assert!(status.visible_in(FormMode::Edit));
        assert!(validate_form(&[status], &FormValues::new(), FormMode::Create).is_empty());
    }

    #[test]
    fn test_number_parsing() {
        let base = FormValues::new()
            .with("fullName", "Nguyen Van A")
            .with("email", "a@cinema.vn");
        let errors = validate_form(FIELDS, &base.clone().with("quantity", "abc"), FormMode::Edit);
        assert_eq!(errors.get("quantity"), Some("Quantity must be a number"));
        let errors = validate_form(FIELDS, &base.clone().with("quantity", "0"), FormMode::Edit);
        assert_eq!(errors.get("quantity"), Some("Quantity must be at least 1"));
        assert!(validate_form(FIELDS, &base.with("quantity", "5"), FormMode::Edit).is_empty());
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        let base = FormValues::new()
            .with("fullName", "Nguyen Van A")
            .with("email", "a@cinema.vn");
        for raw in ["NaN", "inf", "-inf", "1e400"] {
            let errors = validate_form(FIELDS, &base.clone().with("quantity", raw), FormMode::Edit);
            assert_eq!(errors.get("quantity"), Some("Quantity must be a number"), "{}", raw);
        }
    }

    #[test]
    fn test_form_values_accessors() {
        let values = FormValues::new()
            .with("roomId", " 12 ")
            .with("price", "45000.5")
            .with("note", "  ");
        assert_eq!(values.i64("roomId"), Some(12));
        assert_eq!(values.f64("price"), Some(45000.5));
        assert_eq!(values.text("note"), None);
        assert_eq!(values.get("missing"), "");
    }
}
