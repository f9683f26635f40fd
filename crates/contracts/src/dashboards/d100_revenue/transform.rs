//! Reshaping of [`BranchRevenueData`] into chart-ready series

use super::dto::{BranchRevenueData, GroupBy, MovieRevenue};
use crate::domain::common::RecordId;
use chrono::{Datelike, NaiveDate};

/// Movies shown individually in the movie chart
pub const TOP_MOVIES: usize = 5;
pub const OTHERS_LABEL: &str = "Others";

/// One bar of the revenue-over-time chart
#[derive(Debug, Clone, PartialEq)]
pub struct TimePoint {
    pub label: String,
    pub period: String,
    pub revenue: f64,
    pub refreshments_revenue: f64,
    pub ticket_revenue: f64,
    pub bookings: u64,
}

/// Axis label for a backend period key.
///
/// Unrecognised input is returned unchanged so the chart still shows something.
pub fn period_label(period: &str, group_by: GroupBy) -> String {
    let period = period.trim();
    let label = match group_by {
        GroupBy::Day => parse_date(period).map(|d| d.format("%d/%m").to_string()),
        GroupBy::Month => parse_year_month(period).map(|(y, m)| format!("{:02}/{}", m, y)),
        GroupBy::Quarter => parse_quarter(period).map(|(y, q)| format!("Q{}/{}", q, y)),
        GroupBy::Year => parse_year(period).map(|y| y.to_string()),
    };
    label.unwrap_or_else(|| period.to_string())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn parse_year(value: &str) -> Option<i32> {
    let year = value.get(..4)?;
    if !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

fn parse_year_month(value: &str) -> Option<(i32, u32)> {
    if let Some(date) = parse_date(value) {
        return Some((date.year(), date.month()));
    }
    let (year, month) = value.split_once('-')?;
    let year = parse_year(year)?;
    let month: u32 = month.get(..2).unwrap_or(month).parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// `2024-Q1`, `2024Q1`, or any date inside the quarter
fn parse_quarter(value: &str) -> Option<(i32, u32)> {
    if let Some(pos) = value.find(['Q', 'q']) {
        let year = parse_year(value)?;
        let quarter: u32 = value[pos + 1..].trim().parse().ok()?;
        return (1..=4).contains(&quarter).then_some((year, quarter));
    }
    let (year, month) = parse_year_month(value)?;
    Some((year, (month - 1) / 3 + 1))
}

pub fn time_series(data: &BranchRevenueData, group_by: GroupBy) -> Vec<TimePoint> {
    data.revenue_by_period
        .iter()
        .map(|p| TimePoint {
            label: period_label(&p.period, group_by),
            period: p.period.clone(),
            revenue: p.revenue,
            refreshments_revenue: p.refreshments_revenue,
            ticket_revenue: p.revenue - p.refreshments_revenue,
            bookings: p.bookings,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSlice {
    pub name: &'static str,
    pub value: f64,
    /// 0..=100, zero when there is no revenue at all
    pub percent: f64,
}

/// Ticket vs refreshments split for the pie chart
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub total: f64,
    pub slices: Vec<DistributionSlice>,
}

impl Distribution {
    /// Nothing to draw, the chart shows its empty state
    pub fn is_empty(&self) -> bool {
        self.slices.iter().all(|s| s.value <= 0.0)
    }
}

pub fn distribution(data: &BranchRevenueData) -> Distribution {
    let ticket = data.ticket_revenue().max(0.0);
    let refreshments = data.refreshments_revenue.max(0.0);
    let total = ticket + refreshments;
    let percent = |value: f64| if total > 0.0 { value / total * 100.0 } else { 0.0 };

    Distribution {
        total,
        slices: vec![
            DistributionSlice {
                name: "Tickets",
                value: ticket,
                percent: percent(ticket),
            },
            DistributionSlice {
                name: "Refreshments",
                value: refreshments,
                percent: percent(refreshments),
            },
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieEntryKind {
    Movie(RecordId),
    /// Synthetic rollup of the movies beyond the top N
    Others { movies: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieChartEntry {
    pub kind: MovieEntryKind,
    pub name: String,
    pub revenue: f64,
    pub bookings: u64,
    pub seats: u64,
}

impl MovieChartEntry {
    pub fn is_others(&self) -> bool {
        matches!(self.kind, MovieEntryKind::Others { .. })
    }
}

/// Top movies by revenue, the tail folded into one "Others" entry
pub fn movie_rollup(stats: &[MovieRevenue]) -> Vec<MovieChartEntry> {
    let mut sorted: Vec<&MovieRevenue> = stats.iter().collect();
    sorted.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));

    let mut entries: Vec<MovieChartEntry> = sorted
        .iter()
        .take(TOP_MOVIES)
        .map(|m| MovieChartEntry {
            kind: MovieEntryKind::Movie(m.movie_id),
            name: m.movie_name.clone(),
            revenue: m.revenue,
            bookings: m.bookings,
            seats: m.seats,
        })
        .collect();

    let rest = &sorted[sorted.len().min(TOP_MOVIES)..];
    if !rest.is_empty() {
        entries.push(MovieChartEntry {
            kind: MovieEntryKind::Others { movies: rest.len() },
            name: OTHERS_LABEL.to_string(),
            revenue: rest.iter().map(|m| m.revenue).sum(),
            bookings: rest.iter().map(|m| m.bookings).sum(),
            seats: rest.iter().map(|m| m.seats).sum(),
        });
    }
    entries
}

/// Figures for the summary cards above the charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueTotals {
    pub total_revenue: f64,
    pub ticket_revenue: f64,
    pub refreshments_revenue: f64,
    pub bookings: u64,
    pub seats_sold: u64,
}

/// Everything the dashboard renders, derived from one response
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueView {
    pub totals: RevenueTotals,
    pub time_series: Vec<TimePoint>,
    pub distribution: Distribution,
    pub movies: Vec<MovieChartEntry>,
}

impl RevenueView {
    pub fn build(data: &BranchRevenueData, group_by: GroupBy) -> Self {
        Self {
            totals: RevenueTotals {
                total_revenue: data.total_revenue,
                ticket_revenue: data.ticket_revenue(),
                refreshments_revenue: data.refreshments_revenue,
                bookings: data.total_bookings,
                seats_sold: data.total_seats_sold,
            },
            time_series: time_series(data, group_by),
            distribution: distribution(data),
            movies: movie_rollup(&data.movie_stats),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_revenue::dto::PeriodRevenue;

    fn movie(id: RecordId, revenue: f64) -> MovieRevenue {
        MovieRevenue {
            movie_id: id,
            movie_name: format!("Movie {}", id),
            revenue,
            bookings: id as u64,
            seats: id as u64 * 2,
        }
    }

    #[test]
    fn test_day_and_year_labels() {
        assert_eq!(period_label("2024-03-15", GroupBy::Day), "15/03");
        assert_eq!(period_label("2024-03-15", GroupBy::Year), "2024");
        assert_eq!(period_label("2024-03-15T00:00:00.000Z", GroupBy::Day), "15/03");
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(period_label("2024-03", GroupBy::Month), "03/2024");
        assert_eq!(period_label("2024-11-02", GroupBy::Month), "11/2024");
    }

    #[test]
    fn test_quarter_labels() {
        assert_eq!(period_label("2024-Q2", GroupBy::Quarter), "Q2/2024");
        assert_eq!(period_label("2024-08-20", GroupBy::Quarter), "Q3/2024");
        assert_eq!(period_label("2024-12", GroupBy::Quarter), "Q4/2024");
    }

    #[test]
    fn test_unparseable_label_kept() {
        assert_eq!(period_label("week 12", GroupBy::Day), "week 12");
        assert_eq!(period_label("2024-Q9", GroupBy::Quarter), "2024-Q9");
    }

    #[test]
    fn test_time_series_derives_ticket_revenue() {
        let data = BranchRevenueData {
            revenue_by_period: vec![PeriodRevenue {
                period: "2024-03-15".into(),
                revenue: 500_000.0,
                refreshments_revenue: 120_000.0,
                bookings: 10,
                seats_sold: 18,
            }],
            ..BranchRevenueData::default()
        };
        let series = time_series(&data, GroupBy::Day);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, "15/03");
        assert_eq!(series[0].ticket_revenue, 380_000.0);
    }

    #[test]
    fn test_distribution_zero_revenue() {
        let dist = distribution(&BranchRevenueData::empty());
        assert!(dist.is_empty());
        assert_eq!(dist.slices.len(), 2);
        for slice in &dist.slices {
            assert_eq!(slice.value, 0.0);
            assert_eq!(slice.percent, 0.0);
        }
    }

    #[test]
    fn test_distribution_split() {
        let data = BranchRevenueData {
            total_revenue: 1000.0,
            refreshments_revenue: 250.0,
            ..BranchRevenueData::default()
        };
        let dist = distribution(&data);
        assert!(!dist.is_empty());
        assert_eq!(dist.slices[0].value, 750.0);
        assert_eq!(dist.slices[0].percent, 75.0);
        assert_eq!(dist.slices[1].percent, 25.0);
    }

    #[test]
    fn test_rollup_seven_movies() {
        let stats: Vec<MovieRevenue> = [
            (1, 300.0),
            (2, 900.0),
            (3, 100.0),
            (4, 700.0),
            (5, 50.0),
            (6, 500.0),
            (7, 400.0),
        ]
        .into_iter()
        .map(|(id, revenue)| movie(id, revenue))
        .collect();

        let entries = movie_rollup(&stats);
        assert_eq!(entries.len(), 6);

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Movie 2", "Movie 4", "Movie 6", "Movie 7", "Movie 1", OTHERS_LABEL]
        );

        // 6th and 7th by revenue: movie 3 (100) and movie 5 (50)
        let others = &entries[5];
        assert!(others.is_others());
        assert_eq!(others.kind, MovieEntryKind::Others { movies: 2 });
        assert_eq!(others.revenue, 150.0);
        assert_eq!(others.bookings, 3 + 5);
        assert_eq!(others.seats, 6 + 10);
    }

    #[test]
    fn test_rollup_five_or_fewer() {
        let stats: Vec<MovieRevenue> = (1..=5).map(|id| movie(id, id as f64)).collect();
        let entries = movie_rollup(&stats);
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| !e.is_others()));
        assert!(movie_rollup(&[]).is_empty());
    }

    #[test]
    fn test_view_build() {
        let data = BranchRevenueData {
            total_revenue: 2000.0,
            refreshments_revenue: 500.0,
            total_bookings: 20,
            total_seats_sold: 35,
            ..BranchRevenueData::default()
        };
        let view = RevenueView::build(&data, GroupBy::Month);
        assert_eq!(view.totals.ticket_revenue, 1500.0);
        assert!(view.time_series.is_empty());
        assert!(view.movies.is_empty());
    }
}
