//! Branch revenue statistics: wire types, chart transforms and the query
//! entry point shared by the dashboard and its tests.

pub mod dto;
pub mod query;
pub mod transform;

pub use dto::*;
pub use query::{query_revenue, RevenueSource};
pub use transform::*;
