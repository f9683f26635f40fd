use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::Paginated;
use contracts::shared::form_schema::{FieldKind, FieldSpec, FormValues, ValidationRules};
use contracts::shared::pagination::PageRequest;
use contracts::system::accounts::{
    Account, AccountSearchQuery, AccountStatus, CreateAccountDto, Permission, Role, UpdateAccountDto,
};
use contracts::system::auth::{AdminScope, ROLE_ADMIN, ROLE_STAFF};

use super::api;
use crate::shared::date_utils::format_date;
use crate::shared::resource_manager::{require_id, Column, ManagedResource, ResourceApi};

/// Rows in one page of keyword search results
const SEARCH_PAGE_SIZE: u64 = 20;

const FULL_NAME: FieldSpec = FieldSpec::new("fullName", "Full name", FieldKind::Text)
    .with_rules(ValidationRules::required().with_min_length(3).with_max_length(100));
const EMAIL: FieldSpec = FieldSpec::new("email", "Email", FieldKind::Email)
    .with_rules(ValidationRules::email())
    .with_placeholder("name@cinema.vn");
const PHONE: FieldSpec = FieldSpec::new("phone", "Phone", FieldKind::Phone)
    .with_rules(ValidationRules::phone())
    .with_placeholder("0912345678");
const PASSWORD: FieldSpec = FieldSpec::new("password", "Password", FieldKind::Password)
    .with_rules(ValidationRules::required().with_min_length(6).with_max_length(64))
    .create_only();
const BRANCH: FieldSpec = FieldSpec::new("branchId", "Branch", FieldKind::Select("branches"))
    .with_rules(ValidationRules::required());
const STATUS: FieldSpec = FieldSpec::new("status", "Status", FieldKind::Select("account_status"))
    .with_rules(ValidationRules::required())
    .edit_only();

const CHAIN_FIELDS: &[FieldSpec] = &[FULL_NAME, EMAIL, PHONE, PASSWORD, BRANCH, STATUS];
const BRANCH_FIELDS: &[FieldSpec] = &[FULL_NAME, EMAIL, PHONE, PASSWORD, STATUS];

const KEYWORD: FieldSpec = FieldSpec::new("keyword", "Search name or email", FieldKind::Text);

fn create_dto(values: &FormValues, branch_id: Option<RecordId>) -> CreateAccountDto {
    CreateAccountDto {
        email: values.text("email").unwrap_or_default(),
        password: values.get("password").to_string(),
        full_name: values.text("fullName").unwrap_or_default(),
        phone: values.text("phone").unwrap_or_default(),
        branch_id,
    }
}

fn update_dto(values: &FormValues, branch_id: Option<RecordId>) -> UpdateAccountDto {
    UpdateAccountDto {
        email: values.text("email").unwrap_or_default(),
        full_name: values.text("fullName").unwrap_or_default(),
        phone: values.text("phone").unwrap_or_default(),
        branch_id,
        status: values.text("status").and_then(|s| AccountStatus::parse(&s)),
    }
}

fn account_values(account: &Account) -> FormValues {
    FormValues::new()
        .with("fullName", account.full_name.clone().unwrap_or_default())
        .with("email", account.email.clone())
        .with("phone", account.phone.clone().unwrap_or_default())
        .with(
            "branchId",
            account.branch_id.map(|id| id.to_string()).unwrap_or_default(),
        )
        .with("status", account.status.as_str())
}

fn account_columns() -> Vec<Column<Account>> {
    vec![
        Column::new("ID", |a| a.id.to_string()),
        Column::new("Full name", |a| a.full_name.clone().unwrap_or_default()),
        Column::new("Email", |a| a.email.clone()),
        Column::new("Phone", |a| a.phone.clone().unwrap_or_default()),
        Column::new("Branch", |a| a.branch_id.map(|id| format!("#{}", id)).unwrap_or_default()),
        Column::new("Roles", |a| a.role_names.join(", ")),
        Column::new("Status", |a| a.status.label().to_string()),
        Column::new("Created", |a| a.created_at.as_deref().map(format_date).unwrap_or_default()),
    ]
}

async fn search(keyword: &str, role: Option<&str>, page: u64) -> Result<Paginated<Account>, ApiError> {
    let query = AccountSearchQuery::new(
        keyword.trim(),
        role.map(str::to_string),
        PageRequest::for_page(page, SEARCH_PAGE_SIZE),
    );
    api::search_accounts(&query).await
}

fn keyword(filter: Option<String>) -> Option<String> {
    filter.filter(|k| !k.trim().is_empty())
}

/// Branch admin accounts, managed by the super admin
#[derive(Clone, Copy, Debug, Default)]
pub struct AdminAccountResource;

impl ResourceApi for AdminAccountResource {
    type Entity = Account;

    async fn list(&self, filter: Option<String>) -> Result<Vec<Account>, ApiError> {
        self.list_page(filter, 1).await.map(|page| page.items)
    }

    async fn list_page(&self, filter: Option<String>, page: u64) -> Result<Paginated<Account>, ApiError> {
        match keyword(filter) {
            Some(k) => search(&k, Some(ROLE_ADMIN), page).await,
            None => api::list_admins().await.map(Paginated::whole),
        }
    }

    async fn create(&self, values: &FormValues) -> Result<Account, ApiError> {
        let branch_id = require_id(values, "branchId", "Branch")?;
        api::create_admin(&create_dto(values, Some(branch_id))).await
    }

    async fn update(&self, id: RecordId, values: &FormValues) -> Result<Account, ApiError> {
        let branch_id = require_id(values, "branchId", "Branch")?;
        api::update_account(id, &update_dto(values, Some(branch_id))).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        api::delete_account(id).await
    }
}

impl ManagedResource for AdminAccountResource {
    fn title(&self) -> &'static str {
        "Branch admins"
    }

    fn singular(&self) -> &'static str {
        "Admin account"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        CHAIN_FIELDS
    }

    fn columns(&self) -> Vec<Column<Account>> {
        account_columns()
    }

    fn form_values(&self, account: &Account) -> FormValues {
        account_values(account)
    }

    fn filter(&self) -> Option<FieldSpec> {
        Some(KEYWORD)
    }
}

/// Staff accounts; a branch admin only manages staff of their own branch
#[derive(Clone, Copy, Debug)]
pub struct StaffAccountResource {
    pub scope: AdminScope,
    pub branch_id: Option<RecordId>,
}

impl StaffAccountResource {
    pub fn new(scope: AdminScope, branch_id: Option<RecordId>) -> Self {
        Self { scope, branch_id }
    }

    fn chain_wide(&self) -> bool {
        self.scope == AdminScope::SuperAdmin
    }

    fn target_branch(&self, values: &FormValues) -> Result<Option<RecordId>, ApiError> {
        if self.chain_wide() {
            require_id(values, "branchId", "Branch").map(Some)
        } else {
            Ok(self.branch_id)
        }
    }

    /// Drop rows of other branches the backend may still return
    fn visible(&self, accounts: Vec<Account>) -> Vec<Account> {
        match (self.chain_wide(), self.branch_id) {
            (false, Some(own)) => accounts
                .into_iter()
                .filter(|a| a.branch_id.map_or(true, |b| b == own))
                .collect(),
            _ => accounts,
        }
    }

    /// [`Self::visible`] on one page, the total shrinks by the dropped rows
    fn visible_page(&self, page: Paginated<Account>) -> Paginated<Account> {
        let fetched = page.items.len() as u64;
        let items = self.visible(page.items);
        let mut meta = page.meta;
        meta.total = meta.total.saturating_sub(fetched - items.len() as u64);
        if meta.offset == 0 && meta.limit == fetched {
            meta.limit = items.len() as u64;
        }
        Paginated { items, meta }
    }
}

impl ResourceApi for StaffAccountResource {
    type Entity = Account;

    async fn list(&self, filter: Option<String>) -> Result<Vec<Account>, ApiError> {
        self.list_page(filter, 1).await.map(|page| page.items)
    }

    async fn list_page(&self, filter: Option<String>, page: u64) -> Result<Paginated<Account>, ApiError> {
        let accounts = match keyword(filter) {
            Some(k) => search(&k, Some(ROLE_STAFF), page).await?,
            None => Paginated::whole(api::list_staff().await?),
        };
        Ok(self.visible_page(accounts))
    }

    async fn create(&self, values: &FormValues) -> Result<Account, ApiError> {
        api::create_staff(&create_dto(values, self.target_branch(values)?)).await
    }

    async fn update(&self, id: RecordId, values: &FormValues) -> Result<Account, ApiError> {
        api::update_account(id, &update_dto(values, self.target_branch(values)?)).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        api::delete_account(id).await
    }
}

impl ManagedResource for StaffAccountResource {
    fn title(&self) -> &'static str {
        "Staff"
    }

    fn singular(&self) -> &'static str {
        "Staff account"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        if self.chain_wide() {
            CHAIN_FIELDS
        } else {
            BRANCH_FIELDS
        }
    }

    fn columns(&self) -> Vec<Column<Account>> {
        account_columns()
    }

    fn form_values(&self, account: &Account) -> FormValues {
        account_values(account)
    }

    fn filter(&self) -> Option<FieldSpec> {
        Some(KEYWORD)
    }
}

/// Every account of the chain, read only
#[derive(Clone, Copy, Debug, Default)]
pub struct AccountDirectoryResource;

impl ResourceApi for AccountDirectoryResource {
    type Entity = Account;

    async fn list(&self, filter: Option<String>) -> Result<Vec<Account>, ApiError> {
        self.list_page(filter, 1).await.map(|page| page.items)
    }

    async fn list_page(&self, filter: Option<String>, page: u64) -> Result<Paginated<Account>, ApiError> {
        match keyword(filter) {
            Some(k) => search(&k, None, page).await,
            None => api::list_accounts().await.map(Paginated::whole),
        }
    }
}

impl ManagedResource for AccountDirectoryResource {
    fn title(&self) -> &'static str {
        "All accounts"
    }

    fn singular(&self) -> &'static str {
        "Account"
    }

    fn columns(&self) -> Vec<Column<Account>> {
        account_columns()
    }

    fn filter(&self) -> Option<FieldSpec> {
        Some(KEYWORD)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RoleResource;

impl ResourceApi for RoleResource {
    type Entity = Role;

    async fn list(&self, _filter: Option<String>) -> Result<Vec<Role>, ApiError> {
        api::list_roles().await
    }
}

impl ManagedResource for RoleResource {
    fn title(&self) -> &'static str {
        "Roles"
    }

    fn singular(&self) -> &'static str {
        "Role"
    }

    fn columns(&self) -> Vec<Column<Role>> {
        vec![
            Column::new("ID", |r| r.id.to_string()),
            Column::new("Role", |r| r.name.clone()),
            Column::new("Permissions", |r| {
                r.permissions
                    .iter()
                    .map(|p| p.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }),
        ]
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PermissionResource;

impl ResourceApi for PermissionResource {
    type Entity = Permission;

    async fn list(&self, _filter: Option<String>) -> Result<Vec<Permission>, ApiError> {
        api::list_permissions().await
    }
}

impl ManagedResource for PermissionResource {
    fn title(&self) -> &'static str {
        "Permissions"
    }

    fn singular(&self) -> &'static str {
        "Permission"
    }

    fn columns(&self) -> Vec<Column<Permission>> {
        vec![
            Column::new("ID", |p| p.id.to_string()),
            Column::new("Permission", |p| p.name.clone()),
            Column::new("Description", |p| p.description.clone().unwrap_or_default()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::form_schema::{validate_form, FormMode};

    fn account(id: RecordId, branch_id: Option<RecordId>) -> Account {
        Account {
            id,
            email: format!("staff{}@cinema.vn", id),
            full_name: None,
            phone: None,
            branch_id,
            role_ids: vec![3],
            role_names: vec![ROLE_STAFF.to_string()],
            status: AccountStatus::Active,
            created_at: None,
        }
    }

    fn new_staff() -> FormValues {
        FormValues::new()
            .with("fullName", "Tran Thi B")
            .with("email", "b@cinema.vn")
            .with("phone", "0912345678")
            .with("password", "secret1")
    }

    #[test]
    fn test_password_only_on_create_status_only_on_edit() {
        let values = new_staff();
        assert!(validate_form(BRANCH_FIELDS, &values, FormMode::Create).is_empty());

        let edit = validate_form(BRANCH_FIELDS, &values, FormMode::Edit);
        assert_eq!(edit.get("status"), Some("Status is required"));
        assert!(edit.get("password").is_none());
    }

    #[test]
    fn test_branch_admin_creates_staff_in_own_branch() {
        let resource = StaffAccountResource::new(AdminScope::BranchAdmin, Some(2));
        let dto = create_dto(&new_staff(), resource.target_branch(&new_staff()).unwrap());
        assert_eq!(dto.branch_id, Some(2));
        assert_eq!(dto.password, "secret1");
    }

    #[test]
    fn test_branch_admin_sees_only_own_staff() {
        let resource = StaffAccountResource::new(AdminScope::BranchAdmin, Some(2));
        let visible = resource.visible(vec![account(1, Some(2)), account(2, Some(5)), account(3, None)]);
        let ids: Vec<RecordId> = visible.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let chain = StaffAccountResource::new(AdminScope::SuperAdmin, None);
        assert_eq!(chain.visible(vec![account(1, Some(2)), account(2, Some(5))]).len(), 2);
    }

    #[test]
    fn test_filtered_page_keeps_total_consistent() {
        use contracts::shared::envelope::PageMeta;

        let resource = StaffAccountResource::new(AdminScope::BranchAdmin, Some(2));
        let searched = Paginated {
            items: vec![account(1, Some(2)), account(2, Some(5))],
            meta: PageMeta {
                total: 45,
                limit: 20,
                offset: 20,
            },
        };
        let page = resource.visible_page(searched);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.meta.total, 44);
        assert_eq!(page.meta.limit, 20);
        assert!(page.is_partial());

        let whole = resource.visible_page(Paginated::whole(vec![account(1, Some(2)), account(2, Some(5))]));
        assert_eq!(whole.meta.total, 1);
        assert_eq!(whole.meta.limit, 1);
        assert!(!whole.is_partial());
    }

    #[test]
    fn test_update_dto_parses_status() {
        let values = account_values(&account(4, Some(1))).with("status", "pending");
        let dto = update_dto(&values, Some(1));
        assert_eq!(dto.status, Some(AccountStatus::Pending));
        assert_eq!(dto.email, "staff4@cinema.vn");
    }
}
