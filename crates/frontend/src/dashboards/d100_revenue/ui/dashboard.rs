use chrono::NaiveDate;
use contracts::dashboards::d100_revenue::{
    query_revenue, BranchRevenueData, GroupBy, MovieEntryKind, RevenueQuery, RevenueView,
};
use contracts::domain::common::RecordId;
use contracts::shared::request_generation::{RequestGeneration, RequestTicket};
use contracts::system::auth::AdminScope;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d100_revenue::api::HttpRevenueSource;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::charts::{DistributionPie, MovieRevenueChart, RevenueBarChart};
use crate::shared::components::stat_card::{StatCard, StatFormat};
use crate::shared::date_utils::{format_money, format_thousands};
use crate::shared::resource_manager::form::LookupSelect;
use crate::system::auth::use_session;

#[derive(Debug, Clone, Default)]
struct DashboardState {
    data: BranchRevenueData,
    loaded: bool,
    loading: bool,
    range_invalid: bool,
    generation: RequestGeneration,
}

impl DashboardState {
    /// True only on the change from a valid to an invalid range
    fn observe_range(&mut self, valid: bool) -> bool {
        let entered = !valid && !self.range_invalid;
        self.range_invalid = !valid;
        entered
    }

    fn begin(&mut self) -> RequestTicket {
        self.loading = true;
        self.generation.issue()
    }

    fn finish(&mut self, ticket: RequestTicket, data: Option<BranchRevenueData>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.loading = false;
        self.loaded = true;
        self.data = data.unwrap_or_else(BranchRevenueData::empty);
        true
    }
}

fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[component]
#[allow(non_snake_case)]
pub fn RevenueDashboard() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let scope = session.scope();
    let own_branch = session.get().and_then(|s| s.branch_id());

    let initial = RevenueQuery::month_to_date(today(), own_branch);
    let start = RwSignal::new(initial.start_date.format("%Y-%m-%d").to_string());
    let end = RwSignal::new(initial.end_date.format("%Y-%m-%d").to_string());
    let group_by = RwSignal::new(GroupBy::Day);
    let branch = RwSignal::new(String::new());
    let state = RwSignal::new(DashboardState::default());

    let query = Memo::new(move |_| {
        let branch_id = if scope == AdminScope::SuperAdmin {
            branch.with(|b| b.parse::<RecordId>().ok())
        } else {
            own_branch
        };
        Some(RevenueQuery {
            branch_id,
            start_date: parse_input_date(&start.get())?,
            end_date: parse_input_date(&end.get())?,
            group_by: group_by.get(),
        })
    });

    Effect::new(move |_| {
        let Some(q) = query.get() else {
            return;
        };
        let entered_invalid = state
            .try_update(|s| s.observe_range(q.has_valid_range()))
            .unwrap_or(false);
        if entered_invalid {
            log::warn!("Revenue range {} > {}", q.start_date, q.end_date);
            toasts.warning("Start date must not be after end date");
        }
        let Some(ticket) = state.try_update(|s| s.begin()) else {
            return;
        };
        spawn_local(async move {
            let data = match query_revenue(&HttpRevenueSource, &q).await {
                Ok(data) => Some(data),
                Err(e) => {
                    log::error!("Failed to load revenue: {}", e);
                    toasts.error(e.user_message());
                    None
                }
            };
            state.update(|s| {
                if !s.finish(ticket, data) {
                    log::warn!("Discarded stale revenue response");
                }
            });
        });
    });

    let view_model = Memo::new(move |_| state.with(|s| RevenueView::build(&s.data, group_by.get())));
    let loaded = move || state.with(|s| s.loaded);
    let total = move |pick: fn(&RevenueView) -> f64| {
        Signal::derive(move || loaded().then(|| view_model.with(pick)))
    };

    let movie_rows = move || {
        view_model
            .get()
            .movies
            .into_iter()
            .map(|entry| {
                let name = match entry.kind {
                    MovieEntryKind::Movie(_) => entry.name.clone(),
                    MovieEntryKind::Others { movies } => format!("{} ({} movies)", entry.name, movies),
                };
                view! {
                    <TableRow>
                        <TableCell>{name}</TableCell>
                        <TableCell>{format_money(entry.revenue)}</TableCell>
                        <TableCell>{format_thousands(entry.bookings as i64)}</TableCell>
                        <TableCell>{format_thousands(entry.seats as i64)}</TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Revenue statistics"</h1>
                    <Show when=move || state.with(|s| s.loading)>
                        <Spinner />
                    </Show>
                </div>
            </div>

            <div class="filter-bar">
                <label class="filter-bar__label">"From"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || start.get()
                    on:change=move |ev| start.set(event_target_value(&ev))
                />
                <label class="filter-bar__label">"To"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || end.get()
                    on:change=move |ev| end.set(event_target_value(&ev))
                />
                <select
                    class="form__select"
                    on:change=move |ev| {
                        if let Some(g) = GroupBy::parse(&event_target_value(&ev)) {
                            group_by.set(g);
                        }
                    }
                >
                    {GroupBy::ALL
                        .into_iter()
                        .map(|g| {
                            view! {
                                <option value=g.as_str() selected=move || group_by.get() == g>
                                    {g.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                {(scope == AdminScope::SuperAdmin).then(|| view! {
                    <LookupSelect
                        lookup="branches"
                        value=branch
                        on_change=Callback::new(move |v: String| branch.set(v))
                        empty_label="All branches"
                    />
                })}
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total revenue"
                    icon_name="wallet"
                    value=total(|v| v.totals.total_revenue)
                    format=StatFormat::Money
                />
                <StatCard
                    label="Ticket revenue"
                    icon_name="ticket"
                    value=total(|v| v.totals.ticket_revenue)
                    format=StatFormat::Money
                />
                <StatCard
                    label="Refreshments"
                    icon_name="coffee"
                    value=total(|v| v.totals.refreshments_revenue)
                    format=StatFormat::Money
                />
                <StatCard
                    label="Bookings"
                    icon_name="calendar"
                    value=total(|v| v.totals.bookings as f64)
                    format=StatFormat::Count
                />
                <StatCard
                    label="Seats sold"
                    icon_name="armchair"
                    value=total(|v| v.totals.seats_sold as f64)
                    format=StatFormat::Count
                />
            </div>

            <div class="chart-grid">
                <Card>
                    <h3 class="card__title">"Revenue over time"</h3>
                    <RevenueBarChart points=Signal::derive(move || view_model.with(|v| v.time_series.clone())) />
                </Card>
                <Card>
                    <h3 class="card__title">"Revenue split"</h3>
                    <DistributionPie distribution=Signal::derive(move || view_model.with(|v| v.distribution.clone())) />
                </Card>
                <Card>
                    <h3 class="card__title">"Top movies"</h3>
                    <MovieRevenueChart entries=Signal::derive(move || view_model.with(|v| v.movies.clone())) />
                </Card>
            </div>

            <Show when=move || view_model.with(|v| !v.movies.is_empty())>
                <div class="table-container">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Movie"</TableHeaderCell>
                                <TableHeaderCell>"Revenue"</TableHeaderCell>
                                <TableHeaderCell>"Bookings"</TableHeaderCell>
                                <TableHeaderCell>"Seats"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{movie_rows}</TableBody>
                    </Table>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_warns_once_per_transition() {
        let mut state = DashboardState::default();
        assert!(!state.observe_range(true));
        assert!(state.observe_range(false));
        assert!(!state.observe_range(false));
        assert!(!state.observe_range(true));
        assert!(state.observe_range(false));
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut state = DashboardState::default();
        let first = state.begin();
        let second = state.begin();
        let fresh = BranchRevenueData {
            total_revenue: 10.0,
            ..BranchRevenueData::default()
        };
        assert!(state.finish(second, Some(fresh)));
        assert!(!state.finish(first, None));
        assert_eq!(state.data.total_revenue, 10.0);
        assert!(state.loaded && !state.loading);
    }

    #[test]
    fn test_failed_load_shows_empty() {
        let mut state = DashboardState::default();
        let ticket = state.begin();
        assert!(state.finish(ticket, None));
        assert!(state.data.is_empty());
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(parse_input_date("2024-03-01"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(parse_input_date(""), None);
    }
}
