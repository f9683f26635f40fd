use crate::domain::a002_room::Room;
use crate::domain::common::{EntityRecord, RecordId};
use serde::{Deserialize, Serialize};

/// Seat classification (standard, VIP, couple) used for seat-map colouring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSeat {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub type_seat: Option<TypeSeat>,
    #[serde(default)]
    pub room: Option<Room>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatPayload {
    pub name: String,
    pub type_seat_id: RecordId,
    pub room_id: RecordId,
}

impl EntityRecord for Seat {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl EntityRecord for TypeSeat {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}
