use crate::domain::common::{EntityRecord, RecordId};
use crate::shared::pagination::PageRequest;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: RecordId,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Catalog movie, read only in the admin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Minutes
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub age_rating: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Movie {
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            name: self.name.clone(),
            poster: self.poster.clone(),
            duration: self.duration,
        }
    }

    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Movie as embedded in other records (showtimes, statistics)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub duration: Option<u32>,
}

/// Query for `/movies/search/by-name-movie`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSearchQuery {
    pub name: String,
    pub limit: u64,
    pub offset: u64,
}

impl MovieSearchQuery {
    pub fn new(name: impl Into<String>, page: PageRequest) -> Self {
        Self {
            name: name.into(),
            limit: page.limit,
            offset: page.offset,
        }
    }
}

impl EntityRecord for Movie {
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
    fn test_sparse_movie_deserializes() {
        let json = r#"{"id":9,"name":"Mai","genres":[{"id":1,"name":"Drama"},{"id":2,"name":"Romance"}]}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.genre_names(), "Drama, Romance");
        assert!(movie.actors.is_empty());
        assert_eq!(movie.summary().name, "Mai");
    }
}
