//! Signed-in account recovered from browser storage
//!
//! The login screen (outside this app) stores the bearer token under
//! `accessToken` and a persisted auth store under `authState`, shaped like
//! `{"state": {"account": {...}, "isAuthenticated": true}, "version": 0}`.
//! Older builds used `user` instead of `account`, and some stored the account
//! at the top level; all three shapes are accepted.

use crate::domain::common::RecordId;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const AUTH_STATE_KEY: &str = "authState";

pub const ROLE_SUPER_ADMIN: &str = "SUPER_ADMIN";
pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_STAFF: &str = "STAFF";

/// Which dashboard the account is allowed to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminScope {
    /// Whole chain: branches, admin accounts, catalog-wide settings
    SuperAdmin,
    /// One branch: rooms, seats, showtimes, staff
    BranchAdmin,
    /// Anything else has no admin screens
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAccount {
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub branch_id: Option<RecordId>,
    #[serde(default, alias = "roles")]
    pub role_names: Vec<String>,
}

impl SessionAccount {
    pub fn scope(&self) -> AdminScope {
        let has = |role: &str| self.role_names.iter().any(|r| r.eq_ignore_ascii_case(role));
        if has(ROLE_SUPER_ADMIN) {
            AdminScope::SuperAdmin
        } else if has(ROLE_ADMIN) {
            AdminScope::BranchAdmin
        } else {
            AdminScope::None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub account: SessionAccount,
}

impl Session {
    /// Build a session from the two storage entries
    pub fn from_storage(access_token: &str, auth_state_json: &str) -> Result<Self> {
        if access_token.trim().is_empty() {
            return Err(anyhow!("access token is empty"));
        }
        let account = parse_auth_state(auth_state_json)?;
        Ok(Self {
            access_token: access_token.trim().to_string(),
            account,
        })
    }

    pub fn scope(&self) -> AdminScope {
        self.account.scope()
    }

    pub fn branch_id(&self) -> Option<RecordId> {
        self.account.branch_id
    }
}

/// Extract the account object from the persisted auth store
pub fn parse_auth_state(json: &str) -> Result<SessionAccount> {
    let root: serde_json::Value =
        serde_json::from_str(json).context("authState is not valid JSON")?;
    let state = root.get("state").unwrap_or(&root);
    let account = state
        .get("account")
        .or_else(|| state.get("user"))
        .ok_or_else(|| anyhow!("authState has no account"))?;
    serde_json::from_value(account.clone()).context("authState account has unexpected shape")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_auth_state() {
        let json = r#"{"state":{"isAuthenticated":true,"account":{"id":3,"email":"admin@cinema.vn","branchId":7,"roleNames":["ADMIN"]}},"version":0}"#;
        let session = Session::from_storage("token-1", json).unwrap();
        assert_eq!(session.branch_id(), Some(7));
        assert_eq!(session.scope(), AdminScope::BranchAdmin);
    }

    #[test]
    fn test_flat_user_shape() {
        let json = r#"{"user":{"id":1,"email":"root@cinema.vn","roles":["super_admin"]}}"#;
        let account = parse_auth_state(json).unwrap();
        assert_eq!(account.scope(), AdminScope::SuperAdmin);
        assert_eq!(account.branch_id, None);
    }

    #[test]
    fn test_broken_blob() {
        assert!(parse_auth_state("not json").is_err());
        assert!(parse_auth_state(r#"{"state":{}}"#).is_err());
        assert!(Session::from_storage("  ", r#"{"account":{"id":1,"email":"a@b.c"}}"#).is_err());
    }
}
