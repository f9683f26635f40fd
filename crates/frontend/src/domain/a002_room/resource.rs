use contracts::domain::a002_room::{Room, RoomPayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::form_schema::{FieldKind, FieldSpec, FormValues, ValidationRules};
use contracts::system::auth::AdminScope;

use super::api;
use crate::shared::resource_manager::{require_id, Column, ManagedResource, ResourceApi};

const NAME: FieldSpec = FieldSpec::new("name", "Name", FieldKind::Text)
    .with_rules(ValidationRules::required().with_max_length(50))
    .with_placeholder("Room 1");

const BRANCH: FieldSpec = FieldSpec::new("branchId", "Branch", FieldKind::Select("branches"))
    .with_rules(ValidationRules::required());

const CHAIN_FIELDS: &[FieldSpec] = &[NAME, BRANCH];
const BRANCH_FIELDS: &[FieldSpec] = &[NAME];

/// Rooms; a branch admin only sees and creates rooms of their own branch
#[derive(Clone, Copy, Debug)]
pub struct RoomResource {
    pub scope: AdminScope,
    /// Branch of the signed-in admin
    pub branch_id: Option<RecordId>,
}

impl RoomResource {
    pub fn new(scope: AdminScope, branch_id: Option<RecordId>) -> Self {
        Self { scope, branch_id }
    }

    fn chain_wide(&self) -> bool {
        self.scope == AdminScope::SuperAdmin
    }

    fn to_payload(&self, values: &FormValues) -> Result<RoomPayload, ApiError> {
        let branch_id = if self.chain_wide() {
            Some(require_id(values, "branchId", "Branch")?)
        } else {
            self.branch_id
        };
        Ok(RoomPayload {
            name: values.text("name").unwrap_or_default(),
            branch_id,
        })
    }
}

impl ResourceApi for RoomResource {
    type Entity = Room;

    async fn list(&self, filter: Option<String>) -> Result<Vec<Room>, ApiError> {
        if !self.chain_wide() {
            return api::list_my_branch_rooms().await;
        }
        let rooms = api::list_rooms().await?;
        Ok(match filter.and_then(|f| f.parse::<RecordId>().ok()) {
            Some(branch) => rooms
                .into_iter()
                .filter(|r| r.owner_branch_id() == Some(branch))
                .collect(),
            None => rooms,
        })
    }

    async fn create(&self, values: &FormValues) -> Result<Room, ApiError> {
        api::create_room(&self.to_payload(values)?).await
    }

    async fn update(&self, id: RecordId, values: &FormValues) -> Result<Room, ApiError> {
        api::update_room(id, &self.to_payload(values)?).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        api::delete_room(id).await
    }
}

impl ManagedResource for RoomResource {
    fn title(&self) -> &'static str {
        "Rooms"
    }

    fn singular(&self) -> &'static str {
        "Room"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        if self.chain_wide() {
            CHAIN_FIELDS
        } else {
            BRANCH_FIELDS
        }
    }

    fn columns(&self) -> Vec<Column<Room>> {
        vec![
            Column::new("ID", |r| r.id.to_string()),
            Column::new("Name", |r| r.name.clone()),
            Column::new("Branch", |r| match (&r.branch, r.branch_id) {
                (Some(branch), _) => branch.name.clone(),
                (None, Some(id)) => format!("#{}", id),
                (None, None) => String::new(),
            }),
        ]
    }

    fn form_values(&self, room: &Room) -> FormValues {
        FormValues::new().with("name", room.name.clone()).with(
            "branchId",
            room.owner_branch_id().map(|id| id.to_string()).unwrap_or_default(),
        )
    }

    fn default_values(&self) -> FormValues {
        FormValues::new().with(
            "branchId",
            self.branch_id.map(|id| id.to_string()).unwrap_or_default(),
        )
    }

    fn filter(&self) -> Option<FieldSpec> {
        self.chain_wide()
            .then_some(FieldSpec::new("branchId", "Branch", FieldKind::Select("branches")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_admin_payload_uses_session_branch() {
        let resource = RoomResource::new(AdminScope::BranchAdmin, Some(7));
        let values = FormValues::new().with("name", "Room 2").with("branchId", "99");
        let payload = resource.to_payload(&values).unwrap();
        assert_eq!(payload.branch_id, Some(7));
        assert_eq!(resource.fields().len(), 1);
        assert!(resource.filter().is_none());
    }

    #[test]
    fn test_super_admin_must_pick_branch() {
        let resource = RoomResource::new(AdminScope::SuperAdmin, None);
        let err = resource
            .to_payload(&FormValues::new().with("name", "Room 2"))
            .unwrap_err();
        assert!(err.is_validation());

        let payload = resource
            .to_payload(&FormValues::new().with("name", "Room 2").with("branchId", "3"))
            .unwrap();
        assert_eq!(payload.branch_id, Some(3));
    }
}
