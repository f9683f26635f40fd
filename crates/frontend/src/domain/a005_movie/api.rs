use contracts::domain::a005_movie::{Movie, MovieSearchQuery};
use contracts::domain::common::RecordId;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::{ListPayload, Paginated};
use contracts::shared::pagination::PageRequest;

use crate::shared::http;

const BASE: &str = "/movies";

pub async fn list_movies(page: PageRequest) -> Result<Paginated<Movie>, ApiError> {
    http::get_query::<ListPayload<Movie>, _>(BASE, &page)
        .await
        .map(ListPayload::into_page)
}

pub async fn search_movies(name: &str, page: PageRequest) -> Result<Paginated<Movie>, ApiError> {
    let query = MovieSearchQuery::new(name, page);
    http::get_query::<ListPayload<Movie>, _>(&format!("{}/search/by-name-movie", BASE), &query)
        .await
        .map(ListPayload::into_page)
}

pub async fn get_movie(id: RecordId) -> Result<Movie, ApiError> {
    http::get(&format!("{}/{}", BASE, id)).await
}

/// Full catalog for a blank search, name search otherwise
pub async fn fetch_movie_page(search: &str, page: PageRequest) -> Result<Paginated<Movie>, ApiError> {
    let search = search.trim();
    if search.is_empty() {
        list_movies(page).await
    } else {
        search_movies(search, page).await
    }
}
