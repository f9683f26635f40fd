use crate::domain::a002_room::Room;
use crate::domain::a005_movie::MovieSummary;
use crate::domain::common::{EntityRecord, RecordId};
use serde::{Deserialize, Serialize};

/// Showtime: one movie in one room at one time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowTime {
    pub id: RecordId,
    /// `HH:MM` or `HH:MM:SS`
    pub time_start: String,
    /// `YYYY-MM-DD`
    pub show_date: String,
    #[serde(default)]
    pub movie: Option<MovieSummary>,
    #[serde(default)]
    pub room: Option<Room>,
}

impl ShowTime {
    /// Start time without seconds
    pub fn start_hhmm(&self) -> &str {
        self.time_start.get(..5).unwrap_or(self.time_start.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowTimePayload {
    pub time_start: String,
    pub show_date: String,
    pub movie_id: RecordId,
    pub room_id: RecordId,
}

impl EntityRecord for ShowTime {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        let movie = self
            .movie
            .as_ref()
            .map(|m| m.name.as_str())
            .unwrap_or("showtime");
        format!("{} {} {}", movie, self.show_date, self.start_hhmm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let json = r#"{"id":1,"timeStart":"19:30:00","showDate":"2024-03-15","movie":{"id":4,"name":"Dune"}}"#;
        let show: ShowTime = serde_json::from_str(json).unwrap();
        assert_eq!(show.display_name(), "Dune 2024-03-15 19:30");
    }
}
