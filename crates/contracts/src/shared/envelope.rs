//! Response envelope used by every backend endpoint
//!
//! Single resources come back as `{success, statusCode, message, code, data}`,
//! lists put `{items, meta: {total, limit, offset}}` into `data`. A few older
//! endpoints return a bare array in `data`, [`ListPayload`] accepts both.

use super::api_error::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            status_code: Some(200),
            message: None,
            code: None,
            data: Some(data),
        }
    }

    /// Unwrap `data`, turning `success: false` into [`ApiError::Business`]
    pub fn into_result(self) -> Result<T, ApiError> {
        self.check()?.data.ok_or_else(|| ApiError::Decode("response has no data".to_string()))
    }

    /// For endpoints whose `data` is irrelevant (delete)
    pub fn into_unit(self) -> Result<(), ApiError> {
        self.check().map(|_| ())
    }

    fn check(self) -> Result<Self, ApiError> {
        if self.success {
            return Ok(self);
        }
        Err(ApiError::Business {
            code: self.code,
            message: self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "The server rejected the request".to_string()),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: PageMeta::default(),
        }
    }
}

impl<T> Paginated<T> {
    /// An unpaged list as a single page holding everything
    pub fn whole(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self {
            items,
            meta: PageMeta {
                total,
                limit: total,
                offset: 0,
            },
        }
    }

    /// The backend holds more rows than this page carries
    pub fn is_partial(&self) -> bool {
        self.meta.total > self.items.len() as u64
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Page(Paginated<T>),
    Items(Vec<T>),
}

impl<T> ListPayload<T> {
    pub fn into_page(self) -> Paginated<T> {
        match self {
            ListPayload::Page(page) => page,
            ListPayload::Items(items) => Paginated::whole(items),
        }
    }

    pub fn into_items(self) -> Vec<T> {
        self.into_page().items
    }
}

/// Extract a display message from an error body.
///
/// Validation failures carry `message` as an array of strings.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_unwrap_success() {
        let json = r#"{"success":true,"statusCode":200,"message":"OK","code":"SUCCESS","data":{"id":7}}"#;
        let envelope: ApiEnvelope<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.into_result().unwrap(), Item { id: 7 });
    }

    #[test]
    fn test_business_failure() {
        let json = r#"{"success":false,"statusCode":400,"message":"Voucher code already used","code":"VOUCHER_EXISTS","data":null}"#;
        let envelope: ApiEnvelope<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.into_result(),
            Err(ApiError::Business {
                code: Some("VOUCHER_EXISTS".into()),
                message: "Voucher code already used".into(),
            })
        );
    }

    #[test]
    fn test_delete_without_data() {
        let json = r#"{"success":true,"statusCode":200,"message":"Deleted"}"#;
        let envelope: ApiEnvelope<Item> = serde_json::from_str(json).unwrap();
        assert!(envelope.into_unit().is_ok());
    }

    #[test]
    fn test_list_payload_shapes() {
        let paged = r#"{"items":[{"id":1},{"id":2}],"meta":{"total":23,"limit":8,"offset":16}}"#;
        let page = serde_json::from_str::<ListPayload<Item>>(paged).unwrap().into_page();
        assert_eq!(page.meta.total, 23);
        assert_eq!(page.items.len(), 2);
        assert!(page.is_partial());

        let bare = r#"[{"id":1},{"id":2},{"id":3}]"#;
        let page = serde_json::from_str::<ListPayload<Item>>(bare).unwrap().into_page();
        assert_eq!(page.meta.total, 3);
        assert_eq!(page.meta.offset, 0);
        assert!(!page.is_partial());
    }

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message_from_body(r#"{"statusCode":401,"message":"Unauthorized"}"#),
            Some("Unauthorized".to_string())
        );
        assert_eq!(
            error_message_from_body(r#"{"message":["name should not be empty","price must be a number"]}"#),
            Some("name should not be empty; price must be a number".to_string())
        );
        assert_eq!(error_message_from_body("<html>"), None);
    }
}
