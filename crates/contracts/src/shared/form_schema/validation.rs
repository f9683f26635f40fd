//! Validation rules for form fields

use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const PHONE_PATTERN: &str = r"^\+?[0-9]{9,15}$";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).expect("valid phone regex"));

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static str>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        let mut rules = Self::none();
        rules.required = true;
        rules
    }

    /// Required email address
    pub const fn email() -> Self {
        Self::required().with_pattern(EMAIL_PATTERN, "Email address is not valid")
    }

    /// Required phone number, digits with optional leading `+`
    pub const fn phone() -> Self {
        Self::required().with_pattern(PHONE_PATTERN, "Phone number must contain 9 to 15 digits")
    }

    pub const fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub const fn with_pattern(mut self, pattern: &'static str, error: &'static str) -> Self {
        self.pattern = Some(pattern);
        self.custom_error = Some(error);
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    ///
    /// Optional fields left blank skip every other check.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        if let Some(pattern) = self.pattern {
            let matched = match pattern {
                EMAIL_PATTERN => EMAIL_RE.is_match(trimmed),
                PHONE_PATTERN => PHONE_RE.is_match(trimmed),
                other => Regex::new(other)
                    .map(|re| re.is_match(trimmed))
                    .unwrap_or(false),
            };
            if !matched {
                return Err(self
                    .custom_error
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} has an invalid format", field_label)));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Name"),
            Err("Name is required".to_string())
        );
        assert!(rules.validate_string("Hall 1", "Name").is_ok());
    }

    #[test]
    fn test_optional_blank_skips_other_checks() {
        let rules = ValidationRules::none().with_min_length(5);
        assert!(rules.validate_string("", "Address").is_ok());
        assert!(rules.validate_string("abc", "Address").is_err());
    }

    #[test]
    fn test_length_counts_chars() {
        let rules = ValidationRules::required().with_min_length(3).with_max_length(4);
        assert!(rules.validate_string("Rạp", "Name").is_ok());
        assert!(rules.validate_string("Rạp 12", "Name").is_err());
    }

    #[test]
    fn test_email_and_phone() {
        assert!(ValidationRules::email().validate_string("admin@cinema.vn", "Email").is_ok());
        assert_eq!(
            ValidationRules::email().validate_string("admin@", "Email"),
            Err("Email address is not valid".to_string())
        );
        assert!(ValidationRules::phone().validate_string("0912345678", "Phone").is_ok());
        assert!(ValidationRules::phone().validate_string("+84912345678", "Phone").is_ok());
        assert!(ValidationRules::phone().validate_string("09-12", "Phone").is_err());
    }

    #[test]
    fn test_custom_pattern() {
        let rules = ValidationRules::required().with_pattern(r"^[A-Z0-9]+$", "Code must be upper case");
        assert!(rules.validate_string("SUMMER25", "Code").is_ok());
        assert_eq!(
            rules.validate_string("summer", "Code"),
            Err("Code must be upper case".to_string())
        );
    }

    #[test]
    fn test_number_range() {
        let rules = ValidationRules::required().with_range(Some(0.0), Some(100.0));
        assert!(rules.validate_number(50.0, "Discount").is_ok());
        assert!(rules.validate_number(-1.0, "Discount").is_err());
        assert!(rules.validate_number(101.0, "Discount").is_err());
    }
}
