use contracts::domain::a003_seat::{Seat, SeatPayload, TypeSeat};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::form_schema::{FieldKind, FieldSpec, FormValues, ValidationRules};
use contracts::system::auth::AdminScope;

use super::api;
use crate::shared::resource_manager::{require_id, Column, ManagedResource, ResourceApi};

const NAME: FieldSpec = FieldSpec::new("name", "Seat", FieldKind::Text)
    .with_rules(
        ValidationRules::required()
            .with_max_length(5)
            .with_pattern(r"^[A-Z][0-9]{1,3}$", "Seat must be a row letter and a number, e.g. A12"),
    )
    .with_placeholder("A12");

const TYPE_SEAT: FieldSpec = FieldSpec::new("typeSeatId", "Seat type", FieldKind::Select("type_seats"))
    .with_rules(ValidationRules::required());

const CHAIN_FIELDS: &[FieldSpec] = &[
    NAME,
    TYPE_SEAT,
    FieldSpec::new("roomId", "Room", FieldKind::Select("rooms")).with_rules(ValidationRules::required()),
];

const BRANCH_FIELDS: &[FieldSpec] = &[
    NAME,
    TYPE_SEAT,
    FieldSpec::new("roomId", "Room", FieldKind::Select("my_rooms")).with_rules(ValidationRules::required()),
];

fn to_payload(values: &FormValues) -> Result<SeatPayload, ApiError> {
    Ok(SeatPayload {
        name: values.text("name").unwrap_or_default(),
        type_seat_id: require_id(values, "typeSeatId", "Seat type")?,
        room_id: require_id(values, "roomId", "Room")?,
    })
}

#[derive(Clone, Copy, Debug)]
pub struct SeatResource {
    pub scope: AdminScope,
}

impl SeatResource {
    pub fn new(scope: AdminScope) -> Self {
        Self { scope }
    }

    fn room_lookup(&self) -> &'static str {
        if self.scope == AdminScope::SuperAdmin {
            "rooms"
        } else {
            "my_rooms"
        }
    }
}

impl ResourceApi for SeatResource {
    type Entity = Seat;

    /// Filter is the selected room id
    async fn list(&self, filter: Option<String>) -> Result<Vec<Seat>, ApiError> {
        match filter.and_then(|f| f.parse::<RecordId>().ok()) {
            Some(room_id) => api::list_seats_by_room(room_id).await,
            None => api::list_seats().await,
        }
    }

    async fn create(&self, values: &FormValues) -> Result<Seat, ApiError> {
        api::create_seat(&to_payload(values)?).await
    }

    async fn update(&self, id: RecordId, values: &FormValues) -> Result<Seat, ApiError> {
        api::update_seat(id, &to_payload(values)?).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        api::delete_seat(id).await
    }
}

impl ManagedResource for SeatResource {
    fn title(&self) -> &'static str {
        "Seats"
    }

    fn singular(&self) -> &'static str {
        "Seat"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        if self.scope == AdminScope::SuperAdmin {
            CHAIN_FIELDS
        } else {
            BRANCH_FIELDS
        }
    }

    fn columns(&self) -> Vec<Column<Seat>> {
        vec![
            Column::new("ID", |s| s.id.to_string()),
            Column::new("Seat", |s| s.name.clone()),
            Column::new("Type", |s| {
                s.type_seat.as_ref().map(|t| t.name.clone()).unwrap_or_default()
            }),
            Column::new("Room", |s| s.room.as_ref().map(|r| r.name.clone()).unwrap_or_default()),
        ]
    }

    fn form_values(&self, seat: &Seat) -> FormValues {
        let id = |v: Option<RecordId>| v.map(|id| id.to_string()).unwrap_or_default();
        FormValues::new()
            .with("name", seat.name.clone())
            .with("typeSeatId", id(seat.type_seat.as_ref().map(|t| t.id)))
            .with("roomId", id(seat.room.as_ref().map(|r| r.id)))
    }

    fn filter(&self) -> Option<FieldSpec> {
        Some(FieldSpec::new("roomId", "Room", FieldKind::Select(self.room_lookup())))
    }
}

/// Seat categories (standard, VIP, couple); maintained by the backend
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeSeatResource;

impl ResourceApi for TypeSeatResource {
    type Entity = TypeSeat;

    async fn list(&self, _filter: Option<String>) -> Result<Vec<TypeSeat>, ApiError> {
        api::list_type_seats().await
    }
}

impl ManagedResource for TypeSeatResource {
    fn title(&self) -> &'static str {
        "Seat types"
    }

    fn singular(&self) -> &'static str {
        "Seat type"
    }

    fn columns(&self) -> Vec<Column<TypeSeat>> {
        vec![
            Column::new("ID", |t| t.id.to_string()),
            Column::new("Name", |t| t.name.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::form_schema::{validate_form, FormMode};

    #[test]
    fn test_seat_name_pattern() {
        let base = FormValues::new().with("typeSeatId", "1").with("roomId", "2");
        let errors = validate_form(CHAIN_FIELDS, &base.clone().with("name", "12A"), FormMode::Create);
        assert!(errors.get("name").is_some());
        assert!(validate_form(CHAIN_FIELDS, &base.with("name", "B7"), FormMode::Create).is_empty());
    }

    #[test]
    fn test_payload_ids() {
        let values = FormValues::new()
            .with("name", "C3")
            .with("typeSeatId", "2")
            .with("roomId", "11");
        let payload = to_payload(&values).unwrap();
        assert_eq!(payload.type_seat_id, 2);
        assert_eq!(payload.room_id, 11);
    }

    #[test]
    fn test_room_filter_follows_scope() {
        let filter = SeatResource::new(AdminScope::BranchAdmin).filter().unwrap();
        assert_eq!(filter.kind, FieldKind::Select("my_rooms"));
        assert!(!TypeSeatResource.editable());
    }
}
