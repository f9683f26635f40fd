use crate::domain::common::{EntityRecord, RecordId};
use crate::shared::pagination::PageRequest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Pending,
    Deleted,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Deleted => "deleted",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "pending" => Some(Self::Pending),
            "deleted" => Some(Self::Deleted),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Deleted => "Deleted",
        }
    }
}

/// Admin, staff and customer accounts share one record shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub branch_id: Option<RecordId>,
    #[serde(default)]
    pub role_ids: Vec<RecordId>,
    #[serde(default)]
    pub role_names: Vec<String>,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Account {
    pub fn has_role(&self, role: &str) -> bool {
        self.role_names.iter().any(|r| r.eq_ignore_ascii_case(role))
    }
}

impl EntityRecord for Account {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.email.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountDto {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountDto {
    pub email: String,
    pub full_name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,
}

/// Query for `/accounts/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSearchQuery {
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

impl AccountSearchQuery {
    pub fn new(keyword: impl Into<String>, role_name: Option<String>, page: PageRequest) -> Self {
        Self {
            keyword: keyword.into(),
            role_name,
            limit: page.limit,
            offset: page.offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl EntityRecord for Role {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl EntityRecord for Permission {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = r#"{"id":5,"email":"staff@cinema.vn","roleNames":["STAFF"],"status":"pending"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.status, AccountStatus::Pending);
        assert!(account.has_role("staff"));
        assert_eq!(account.display_name(), "staff@cinema.vn");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(AccountStatus::parse(" Active "), Some(AccountStatus::Active));
        assert_eq!(AccountStatus::parse("banned"), None);
    }
}
