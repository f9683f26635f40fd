use crate::domain::common::RecordId;
use chrono::{Datelike, NaiveDate};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Time bucket used by `/booking-statistics/revenue-by-time`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Day,
    Month,
    Quarter,
    Year,
}

impl GroupBy {
    pub const ALL: [GroupBy; 4] = [GroupBy::Day, GroupBy::Month, GroupBy::Quarter, GroupBy::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "By day",
            Self::Month => "By month",
            Self::Quarter => "By quarter",
            Self::Year => "By year",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

/// Parameters of both statistics endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<RecordId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub group_by: GroupBy,
}

impl RevenueQuery {
    /// First day of the month containing `today` up to `today`
    pub fn month_to_date(today: NaiveDate, branch_id: Option<RecordId>) -> Self {
        let start_date = today.with_day(1).unwrap_or(today);
        Self {
            branch_id,
            start_date,
            end_date: today,
            group_by: GroupBy::Day,
        }
    }

    pub fn has_valid_range(&self) -> bool {
        self.start_date <= self.end_date
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodRevenue {
    /// `YYYY-MM-DD`, `YYYY-MM`, `YYYY-Qn` or `YYYY` depending on grouping
    pub period: String,
    #[serde(alias = "totalRevenue")]
    #[serde(deserialize_with = "lenient_f64")]
    pub revenue: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub refreshments_revenue: f64,
    #[serde(alias = "totalBookings")]
    #[serde(deserialize_with = "lenient_u64")]
    pub bookings: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub seats_sold: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieRevenue {
    pub movie_id: RecordId,
    #[serde(alias = "name")]
    pub movie_name: String,
    #[serde(alias = "totalRevenue")]
    #[serde(deserialize_with = "lenient_f64")]
    pub revenue: f64,
    #[serde(alias = "totalBookings")]
    #[serde(deserialize_with = "lenient_u64")]
    pub bookings: u64,
    #[serde(alias = "seatsSold")]
    #[serde(deserialize_with = "lenient_u64")]
    pub seats: u64,
}

/// Aggregate returned for one branch (or the whole chain) over a date range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BranchRevenueData {
    #[serde(deserialize_with = "lenient_f64")]
    pub total_revenue: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub refreshments_revenue: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_bookings: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_seats_sold: u64,
    pub revenue_by_period: Vec<PeriodRevenue>,
    pub movie_stats: Vec<MovieRevenue>,
}

impl BranchRevenueData {
    /// All totals zero, no series
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn ticket_revenue(&self) -> f64 {
        self.total_revenue - self.refreshments_revenue
    }

    pub fn is_empty(&self) -> bool {
        self.total_revenue == 0.0
            && self.total_bookings == 0
            && self.revenue_by_period.is_empty()
            && self.movie_stats.is_empty()
    }
}

/// `/revenue-by-movie` answers either `{movieStats: [...]}` or a bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MovieStatsPayload {
    Wrapped {
        #[serde(rename = "movieStats")]
        movie_stats: Vec<MovieRevenue>,
    },
    List(Vec<MovieRevenue>),
}

impl MovieStatsPayload {
    pub fn into_stats(self) -> Vec<MovieRevenue> {
        match self {
            Self::Wrapped { movie_stats } | Self::List(movie_stats) => movie_stats,
        }
    }
}

/// Aggregates computed with SQL `SUM` arrive as strings (`"1500000.00"`)
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom("number out of range")),
        serde_json::Value::String(s) => s.trim().parse().map_err(de::Error::custom),
        serde_json::Value::Null => Ok(0.0),
        other => Err(de::Error::custom(format!("expected number, got {}", other))),
    }
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = lenient_f64(deserializer)?;
    if value < 0.0 {
        return Err(de::Error::custom("negative count"));
    }
    Ok(value.round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_serializes_dates_as_iso() {
        let query = RevenueQuery {
            branch_id: Some(4),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            group_by: GroupBy::Month,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["startDate"], "2024-03-01");
        assert_eq!(json["groupBy"], "month");
        assert_eq!(json["branchId"], 4);
    }

    #[test]
    fn test_month_to_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let query = RevenueQuery::month_to_date(today, None);
        assert_eq!(query.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(query.has_valid_range());
    }

    #[test]
    fn test_aliases_and_defaults() {
        let json = r#"{"totalRevenue":1500000,"revenueByPeriod":[{"period":"2024-03-15","totalRevenue":500000,"refreshmentsRevenue":100000}]}"#;
        let data: BranchRevenueData = serde_json::from_str(json).unwrap();
        assert_eq!(data.revenue_by_period[0].revenue, 500000.0);
        assert!(data.movie_stats.is_empty());

        let json = r#"{"totalRevenue":"1500000.00","totalBookings":"12","revenueByPeriod":[]}"#;
        let data: BranchRevenueData = serde_json::from_str(json).unwrap();
        assert_eq!(data.total_revenue, 1_500_000.0);
        assert_eq!(data.total_bookings, 12);

        let list = r#"[{"movieId":1,"movieName":"Dune","totalRevenue":900}]"#;
        let stats = serde_json::from_str::<MovieStatsPayload>(list).unwrap().into_stats();
        assert_eq!(stats[0].revenue, 900.0);
    }
}
