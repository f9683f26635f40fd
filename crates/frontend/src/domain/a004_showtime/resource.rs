use contracts::domain::a004_showtime::{ShowTime, ShowTimePayload};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::form_schema::{FieldKind, FieldSpec, FormValues, ValidationRules};
use contracts::system::auth::AdminScope;

use super::api;
use crate::shared::date_utils::format_date;
use crate::shared::resource_manager::{require_id, Column, ManagedResource, ResourceApi};

const SHOW_DATE: FieldSpec =
    FieldSpec::new("showDate", "Show date", FieldKind::Date).with_rules(ValidationRules::required());
const TIME_START: FieldSpec =
    FieldSpec::new("timeStart", "Start time", FieldKind::Time).with_rules(ValidationRules::required());
const MOVIE: FieldSpec =
    FieldSpec::new("movieId", "Movie", FieldKind::Movie).with_rules(ValidationRules::required());

const CHAIN_FIELDS: &[FieldSpec] = &[
    MOVIE,
    FieldSpec::new("roomId", "Room", FieldKind::Select("rooms")).with_rules(ValidationRules::required()),
    SHOW_DATE,
    TIME_START,
];

const BRANCH_FIELDS: &[FieldSpec] = &[
    MOVIE,
    FieldSpec::new("roomId", "Room", FieldKind::Select("my_rooms")).with_rules(ValidationRules::required()),
    SHOW_DATE,
    TIME_START,
];

fn to_payload(values: &FormValues) -> Result<ShowTimePayload, ApiError> {
    Ok(ShowTimePayload {
        time_start: values.text("timeStart").unwrap_or_default(),
        show_date: values.text("showDate").unwrap_or_default(),
        movie_id: require_id(values, "movieId", "Movie")?,
        room_id: require_id(values, "roomId", "Room")?,
    })
}

#[derive(Clone, Copy, Debug)]
pub struct ShowTimeResource {
    pub scope: AdminScope,
}

impl ShowTimeResource {
    pub fn new(scope: AdminScope) -> Self {
        Self { scope }
    }
}

impl ResourceApi for ShowTimeResource {
    type Entity = ShowTime;

    /// Filter is a show date
    async fn list(&self, filter: Option<String>) -> Result<Vec<ShowTime>, ApiError> {
        match filter.filter(|d| !d.trim().is_empty()) {
            Some(date) => api::list_showtimes_by_date(date.trim()).await,
            None => api::list_showtimes().await,
        }
    }

    async fn create(&self, values: &FormValues) -> Result<ShowTime, ApiError> {
        api::create_showtime(&to_payload(values)?).await
    }

    async fn update(&self, id: RecordId, values: &FormValues) -> Result<ShowTime, ApiError> {
        api::update_showtime(id, &to_payload(values)?).await
    }

    async fn delete(&self, id: RecordId) -> Result<(), ApiError> {
        api::delete_showtime(id).await
    }
}

impl ManagedResource for ShowTimeResource {
    fn title(&self) -> &'static str {
        "Showtimes"
    }

    fn singular(&self) -> &'static str {
        "Showtime"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        if self.scope == AdminScope::SuperAdmin {
            CHAIN_FIELDS
        } else {
            BRANCH_FIELDS
        }
    }

    fn columns(&self) -> Vec<Column<ShowTime>> {
        vec![
            Column::new("ID", |s| s.id.to_string()),
            Column::new("Movie", |s| s.movie.as_ref().map(|m| m.name.clone()).unwrap_or_default()),
            Column::new("Room", |s| s.room.as_ref().map(|r| r.name.clone()).unwrap_or_default()),
            Column::new("Date", |s| format_date(&s.show_date)),
            Column::new("Start", |s| s.start_hhmm().to_string()),
        ]
    }

    fn form_values(&self, showtime: &ShowTime) -> FormValues {
        let id = |v: Option<RecordId>| v.map(|id| id.to_string()).unwrap_or_default();
        FormValues::new()
            .with("movieId", id(showtime.movie.as_ref().map(|m| m.id)))
            .with("roomId", id(showtime.room.as_ref().map(|r| r.id)))
            .with("showDate", showtime.show_date.get(..10).unwrap_or(&showtime.show_date))
            .with("timeStart", showtime.start_hhmm())
    }

    fn filter(&self) -> Option<FieldSpec> {
        Some(FieldSpec::new("showDate", "Show date", FieldKind::Date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_movie::MovieSummary;

    #[test]
    fn test_missing_movie_is_a_field_error() {
        let values = FormValues::new()
            .with("roomId", "4")
            .with("showDate", "2024-03-15")
            .with("timeStart", "19:30");
        match to_payload(&values) {
            Err(ApiError::Validation(errors)) => assert!(errors.get("movieId").is_some()),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_values_trim_time_and_date() {
        let showtime = ShowTime {
            id: 1,
            time_start: "19:30:00".into(),
            show_date: "2024-03-15T00:00:00.000Z".into(),
            movie: Some(MovieSummary {
                id: 9,
                name: "Mai".into(),
                poster: None,
                duration: Some(131),
            }),
            room: None,
        };
        let values = ShowTimeResource::new(AdminScope::BranchAdmin).form_values(&showtime);
        assert_eq!(values.get("timeStart"), "19:30");
        assert_eq!(values.get("showDate"), "2024-03-15");
        assert_eq!(values.get("movieId"), "9");
        assert_eq!(values.get("roomId"), "");
    }
}
