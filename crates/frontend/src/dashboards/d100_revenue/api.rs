use contracts::dashboards::d100_revenue::{
    BranchRevenueData, MovieRevenue, MovieStatsPayload, RevenueQuery, RevenueSource,
};
use contracts::shared::api_error::ApiError;

use crate::shared::http;

const BASE: &str = "/booking-statistics";

/// `/booking-statistics` endpoints over the shared HTTP client
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpRevenueSource;

impl RevenueSource for HttpRevenueSource {
    async fn revenue_by_time(&self, query: &RevenueQuery) -> Result<BranchRevenueData, ApiError> {
        http::get_query(&format!("{}/revenue-by-time", BASE), query).await
    }

    async fn revenue_by_movie(&self, query: &RevenueQuery) -> Result<Vec<MovieRevenue>, ApiError> {
        http::get_query::<MovieStatsPayload, _>(&format!("{}/revenue-by-movie", BASE), query)
            .await
            .map(MovieStatsPayload::into_stats)
    }
}
