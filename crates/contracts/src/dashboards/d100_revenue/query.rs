use super::dto::{BranchRevenueData, MovieRevenue, RevenueQuery};
use crate::shared::api_error::ApiError;

/// Backend side of the statistics screen.
///
/// The browser implementation calls the two `/booking-statistics` endpoints;
/// tests plug in a fake.
#[allow(async_fn_in_trait)]
pub trait RevenueSource {
    async fn revenue_by_time(&self, query: &RevenueQuery) -> Result<BranchRevenueData, ApiError>;

    async fn revenue_by_movie(&self, query: &RevenueQuery) -> Result<Vec<MovieRevenue>, ApiError>;
}

/// Load totals, the period series and per-movie figures for one query.
///
/// An inverted date range never reaches the backend: the result is
/// [`BranchRevenueData::empty`].
pub async fn query_revenue<S: RevenueSource>(
    source: &S,
    query: &RevenueQuery,
) -> Result<BranchRevenueData, ApiError> {
    if !query.has_valid_range() {
        return Ok(BranchRevenueData::empty());
    }

    let mut data = source.revenue_by_time(query).await?;
    data.movie_stats = source.revenue_by_movie(query).await?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_revenue::dto::GroupBy;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeSource {
        calls: Cell<usize>,
        fail_movies: bool,
    }

    impl RevenueSource for FakeSource {
        async fn revenue_by_time(&self, _query: &RevenueQuery) -> Result<BranchRevenueData, ApiError> {
            self.calls.set(self.calls.get() + 1);
            Ok(BranchRevenueData {
                total_revenue: 1000.0,
                refreshments_revenue: 200.0,
                total_bookings: 4,
                ..BranchRevenueData::default()
            })
        }

        async fn revenue_by_movie(&self, _query: &RevenueQuery) -> Result<Vec<MovieRevenue>, ApiError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail_movies {
                return Err(ApiError::Network("connection reset".into()));
            }
            Ok(vec![MovieRevenue {
                movie_id: 1,
                movie_name: "Dune".into(),
                revenue: 1000.0,
                bookings: 4,
                seats: 7,
            }])
        }
    }

    fn query(start: (i32, u32, u32), end: (i32, u32, u32)) -> RevenueQuery {
        RevenueQuery {
            branch_id: Some(1),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            group_by: GroupBy::Day,
        }
    }

    #[test]
    fn test_inverted_range_skips_backend() {
        let source = FakeSource::default();
        let result = block_on(query_revenue(&source, &query((2024, 3, 10), (2024, 3, 1)))).unwrap();

        assert_eq!(source.calls.get(), 0);
        assert!(result.revenue_by_period.is_empty());
        assert!(result.movie_stats.is_empty());
        assert_eq!(result.total_revenue, 0.0);
        assert_eq!(result.refreshments_revenue, 0.0);
        assert_eq!(result.total_bookings, 0);
        assert_eq!(result.total_seats_sold, 0);
    }

    #[test]
    fn test_valid_range_merges_movie_stats() {
        let source = FakeSource::default();
        let result = block_on(query_revenue(&source, &query((2024, 3, 1), (2024, 3, 10)))).unwrap();

        assert_eq!(source.calls.get(), 2);
        assert_eq!(result.total_revenue, 1000.0);
        assert_eq!(result.movie_stats.len(), 1);
    }

    #[test]
    fn test_same_day_range_is_valid() {
        let source = FakeSource::default();
        block_on(query_revenue(&source, &query((2024, 3, 1), (2024, 3, 1)))).unwrap();
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn test_error_propagates() {
        let source = FakeSource {
            fail_movies: true,
            ..FakeSource::default()
        };
        let result = block_on(query_revenue(&source, &query((2024, 3, 1), (2024, 3, 10))));
        assert_eq!(result, Err(ApiError::Network("connection reset".into())));
    }
}
