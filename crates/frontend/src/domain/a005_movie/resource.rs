use contracts::domain::a005_movie::Movie;
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::Paginated;
use contracts::shared::form_schema::{FieldKind, FieldSpec};
use contracts::shared::pagination::PageRequest;

use super::api;
use crate::shared::date_utils::format_date;
use crate::shared::resource_manager::{Column, ManagedResource, ResourceApi};

/// Movies in one page of the read-only catalog list
const CATALOG_PAGE_SIZE: u64 = 20;

/// Movie catalog; movies are published by the content team, the admin only browses
#[derive(Clone, Copy, Debug, Default)]
pub struct MovieCatalogResource;

impl ResourceApi for MovieCatalogResource {
    type Entity = Movie;

    async fn list(&self, filter: Option<String>) -> Result<Vec<Movie>, ApiError> {
        self.list_page(filter, 1).await.map(|page| page.items)
    }

    async fn list_page(&self, filter: Option<String>, page: u64) -> Result<Paginated<Movie>, ApiError> {
        let request = PageRequest::for_page(page, CATALOG_PAGE_SIZE);
        api::fetch_movie_page(filter.as_deref().unwrap_or(""), request).await
    }
}

impl ManagedResource for MovieCatalogResource {
    fn title(&self) -> &'static str {
        "Movies"
    }

    fn singular(&self) -> &'static str {
        "Movie"
    }

    fn columns(&self) -> Vec<Column<Movie>> {
        vec![
            Column::new("ID", |m| m.id.to_string()),
            Column::new("Name", |m| m.name.clone()),
            Column::new("Genres", |m| m.genre_names()),
            Column::new("Duration", |m| {
                m.duration.map(|d| format!("{} min", d)).unwrap_or_default()
            }),
            Column::new("Release", |m| {
                m.release_date.as_deref().map(format_date).unwrap_or_default()
            }),
            Column::new("Rating", |m| m.age_rating.clone().unwrap_or_default()),
        ]
    }

    fn filter(&self) -> Option<FieldSpec> {
        Some(FieldSpec::new("name", "Search by name", FieldKind::Text))
    }
}
