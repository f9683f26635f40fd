use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::{ListPayload, Paginated};
use contracts::system::accounts::{
    Account, AccountSearchQuery, CreateAccountDto, Permission, Role, UpdateAccountDto,
};

use crate::shared::http;

const BASE: &str = "/accounts";

async fn list_at(path: &str) -> Result<Vec<Account>, ApiError> {
    http::get::<ListPayload<Account>>(path)
        .await
        .map(ListPayload::into_items)
}

/// Fetch all accounts
pub async fn list_accounts() -> Result<Vec<Account>, ApiError> {
    list_at(BASE).await
}

/// Branch admins of the whole chain
pub async fn list_admins() -> Result<Vec<Account>, ApiError> {
    list_at(&format!("{}/admin", BASE)).await
}

/// Staff visible to the signed-in admin
pub async fn list_staff() -> Result<Vec<Account>, ApiError> {
    list_at(&format!("{}/staff", BASE)).await
}

/// One page of a keyword search
pub async fn search_accounts(query: &AccountSearchQuery) -> Result<Paginated<Account>, ApiError> {
    http::get_query::<ListPayload<Account>, _>(&format!("{}/search", BASE), query)
        .await
        .map(ListPayload::into_page)
}

pub async fn create_admin(dto: &CreateAccountDto) -> Result<Account, ApiError> {
    http::post(&format!("{}/admin", BASE), dto).await
}

pub async fn create_staff(dto: &CreateAccountDto) -> Result<Account, ApiError> {
    http::post(&format!("{}/staff", BASE), dto).await
}

pub async fn update_account(id: RecordId, dto: &UpdateAccountDto) -> Result<Account, ApiError> {
    http::patch(&format!("{}/{}", BASE, id), dto).await
}

pub async fn delete_account(id: RecordId) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", BASE, id)).await
}

pub async fn list_roles() -> Result<Vec<Role>, ApiError> {
    http::get::<ListPayload<Role>>("/roles")
        .await
        .map(ListPayload::into_items)
}

pub async fn list_permissions() -> Result<Vec<Permission>, ApiError> {
    http::get::<ListPayload<Permission>>("/permissions")
        .await
        .map(ListPayload::into_items)
}
