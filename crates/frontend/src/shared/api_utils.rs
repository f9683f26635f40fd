//! API base URL configuration
//!
//! The base URL comes from `CINEMA_API_BASE_URL` at build time (a WASM bundle
//! has no process environment). [`init_config`] runs once in `start()`; a
//! missing value aborts startup before anything is mounted.

use once_cell::sync::OnceCell;

pub const API_BASE_ENV: &str = "CINEMA_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Build config from the raw variable value
    pub fn from_value(value: Option<&str>) -> Result<Self, String> {
        let raw = value.map(str::trim).unwrap_or("");
        if raw.is_empty() {
            return Err(format!(
                "{} is not set, cannot start without an API base URL",
                API_BASE_ENV
            ));
        }
        Ok(Self {
            api_base_url: raw.trim_end_matches('/').to_string(),
        })
    }
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Load config from the build environment and store it for [`api_base`]
pub fn init_config() -> Result<&'static AppConfig, String> {
    let config = AppConfig::from_value(option_env!("CINEMA_API_BASE_URL"))?;
    Ok(CONFIG.get_or_init(|| config))
}

/// Get the base URL for API requests
///
/// Empty string before [`init_config`] ran, which only happens in tests.
pub fn api_base() -> &'static str {
    CONFIG.get().map(|c| c.api_base_url.as_str()).unwrap_or("")
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/rooms/my-branch");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path segment with reserved characters escaped
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_base_url_fails() {
        assert!(AppConfig::from_value(None).is_err());
        assert!(AppConfig::from_value(Some("   ")).is_err());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = AppConfig::from_value(Some("https://api.cinema.vn/api/")).unwrap();
        assert_eq!(config.api_base_url, "https://api.cinema.vn/api");
    }

    #[test]
    fn test_segment_escapes() {
        assert_eq!(segment("2024-03-15"), "2024-03-15");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
