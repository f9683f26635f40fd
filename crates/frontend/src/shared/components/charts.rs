//! Plain SVG charts for the revenue dashboard
//!
//! Geometry is computed by small pure functions so it can be tested without
//! a browser; the components only turn rectangles and paths into markup.

use contracts::dashboards::d100_revenue::{Distribution, MovieChartEntry, TimePoint};
use leptos::prelude::*;

use crate::shared::date_utils::{format_money, format_money_short};

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 240.0;
const AXIS_GUTTER: f64 = 48.0;
const LABEL_BAND: f64 = 24.0;
const PIE_RADIUS: f64 = 90.0;

const PALETTE: &[&str] = &["#2563eb", "#f59e0b", "#10b981", "#ef4444", "#8b5cf6", "#94a3b8"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Column slots of equal width, heights scaled so the largest total fills `height`.
///
/// Each slot keeps a 20% gap. All-zero input gives zero-height bars.
pub fn column_slots(totals: &[f64], width: f64, height: f64) -> Vec<BarRect> {
    if totals.is_empty() {
        return Vec::new();
    }
    let max = totals.iter().copied().fold(0.0_f64, f64::max);
    let slot = width / totals.len() as f64;
    totals
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let h = if max > 0.0 { value.max(0.0) / max * height } else { 0.0 };
            BarRect {
                x: i as f64 * slot + slot * 0.1,
                y: height - h,
                width: slot * 0.8,
                height: h,
            }
        })
        .collect()
}

/// Start and end angle (radians, clockwise from 12 o'clock) of each slice
pub fn pie_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut start = 0.0;
    values
        .iter()
        .map(|&v| {
            let sweep = if total > 0.0 {
                v.max(0.0) / total * std::f64::consts::TAU
            } else {
                0.0
            };
            let range = (start, start + sweep);
            start += sweep;
            range
        })
        .collect()
}

fn point_on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path of a pie wedge; a full circle cannot be drawn as one arc
pub fn wedge_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> Option<String> {
    let sweep = end - start;
    if sweep <= 0.0 || sweep >= std::f64::consts::TAU - 1e-9 {
        return None;
    }
    let (x1, y1) = point_on_circle(cx, cy, r, start);
    let (x2, y2) = point_on_circle(cx, cy, r, end);
    let large_arc = if sweep > std::f64::consts::PI { 1 } else { 0 };
    Some(format!(
        "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
    ))
}

/// Stacked ticket/refreshment revenue per period
#[component]
pub fn RevenueBarChart(#[prop(into)] points: Signal<Vec<TimePoint>>) -> impl IntoView {
    let plot_width = CHART_WIDTH - AXIS_GUTTER;
    let plot_height = CHART_HEIGHT - LABEL_BAND;

    let bars = move || {
        let points = points.get();
        let totals: Vec<f64> = points.iter().map(|p| p.revenue).collect();
        let slots = column_slots(&totals, plot_width, plot_height);
        // one label per slot is unreadable past ~16 bars
        let label_every = points.len().div_ceil(16).max(1);

        points
            .into_iter()
            .zip(slots)
            .enumerate()
            .map(|(i, (point, slot))| {
                let refreshment_h = if point.revenue > 0.0 {
                    slot.height * (point.refreshments_revenue.max(0.0) / point.revenue).min(1.0)
                } else {
                    0.0
                };
                let x = AXIS_GUTTER + slot.x;
                let label = (i % label_every == 0).then(|| {
                    view! {
                        <text
                            class="chart__label"
                            x=x + slot.width / 2.0
                            y=CHART_HEIGHT - 6.0
                            text-anchor="middle"
                        >
                            {point.label.clone()}
                        </text>
                    }
                });
                view! {
                    <g>
                        <rect
                            x=x
                            y=slot.y + refreshment_h
                            width=slot.width
                            height=slot.height - refreshment_h
                            fill=PALETTE[0]
                        />
                        <rect x=x y=slot.y width=slot.width height=refreshment_h fill=PALETTE[1] />
                        {label}
                    </g>
                }
            })
            .collect_view()
    };

    let max_label = move || {
        let max = points.with(|p| p.iter().map(|p| p.revenue).fold(0.0_f64, f64::max));
        format_money_short(max)
    };

    view! {
        <Show
            when=move || points.with(|p| !p.is_empty())
            fallback=|| view! { <div class="chart chart--empty">"No revenue in this period"</div> }
        >
            <svg class="chart" viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)>
                <line
                    class="chart__axis"
                    x1=AXIS_GUTTER
                    y1=0
                    x2=AXIS_GUTTER
                    y2=plot_height
                    stroke="#cbd5e1"
                />
                <line
                    class="chart__axis"
                    x1=AXIS_GUTTER
                    y1=plot_height
                    x2=CHART_WIDTH
                    y2=plot_height
                    stroke="#cbd5e1"
                />
                <text class="chart__label" x=AXIS_GUTTER - 6.0 y=12 text-anchor="end">
                    {max_label}
                </text>
                <text class="chart__label" x=AXIS_GUTTER - 6.0 y=plot_height text-anchor="end">
                    "0"
                </text>
                {bars}
            </svg>
            <div class="chart__legend">
                <span class="chart__legend-item" style=format!("--swatch: {}", PALETTE[0])>"Tickets"</span>
                <span class="chart__legend-item" style=format!("--swatch: {}", PALETTE[1])>"Refreshments"</span>
            </div>
        </Show>
    }
}

/// Ticket vs refreshment share
#[component]
pub fn DistributionPie(#[prop(into)] distribution: Signal<Distribution>) -> impl IntoView {
    let size = PIE_RADIUS * 2.0 + 20.0;
    let c = size / 2.0;

    let wedges = move || {
        let dist = distribution.get();
        let values: Vec<f64> = dist.slices.iter().map(|s| s.value).collect();
        pie_angles(&values)
            .into_iter()
            .enumerate()
            .filter(|(_, (start, end))| end > start)
            .map(|(i, (start, end))| {
                let color = PALETTE[i % PALETTE.len()];
                match wedge_path(c, c, PIE_RADIUS, start, end) {
                    Some(d) => view! { <path d=d fill=color /> }.into_any(),
                    None => view! { <circle cx=c cy=c r=PIE_RADIUS fill=color /> }.into_any(),
                }
            })
            .collect_view()
    };

    let legend = move || {
        distribution
            .get()
            .slices
            .into_iter()
            .enumerate()
            .map(|(i, slice)| {
                let text = format!("{}: {} ({:.1}%)", slice.name, format_money(slice.value), slice.percent);
                view! {
                    <div class="chart__legend-item" style=format!("--swatch: {}", PALETTE[i % PALETTE.len()])>
                        {text}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || distribution.with(|d| !d.is_empty())
            fallback=|| view! { <div class="chart chart--empty">"No revenue in this period"</div> }
        >
            <div class="chart chart--pie">
                <svg viewBox=format!("0 0 {} {}", size, size) width=size height=size>
                    {wedges}
                </svg>
                <div class="chart__legend">{legend}</div>
            </div>
        </Show>
    }
}

/// Horizontal bars of the top movies plus "Others"
#[component]
pub fn MovieRevenueChart(#[prop(into)] entries: Signal<Vec<MovieChartEntry>>) -> impl IntoView {
    let rows = move || {
        let entries = entries.get();
        let max = entries.iter().map(|e| e.revenue).fold(0.0_f64, f64::max);
        entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let percent = if max > 0.0 { entry.revenue.max(0.0) / max * 100.0 } else { 0.0 };
                let color = if entry.is_others() {
                    PALETTE[PALETTE.len() - 1]
                } else {
                    PALETTE[i % (PALETTE.len() - 1)]
                };
                view! {
                    <div class="hbar">
                        <div class="hbar__name" title=entry.name.clone()>{entry.name.clone()}</div>
                        <div class="hbar__track">
                            <div
                                class="hbar__fill"
                                style=format!("width: {:.1}%; background: {}", percent, color)
                            ></div>
                        </div>
                        <div class="hbar__value">{format_money(entry.revenue)}</div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || entries.with(|e| !e.is_empty())
            fallback=|| view! { <div class="chart chart--empty">"No movie sales in this period"</div> }
        >
            <div class="chart chart--hbar">{rows}</div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_columns_scale_to_max() {
        let bars = column_slots(&[50.0, 100.0, 0.0, 25.0], 400.0, 200.0);
        assert_eq!(bars.len(), 4);
        assert_eq!(bars[1].height, 200.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 100.0);
        assert_eq!(bars[2].height, 0.0);
        assert_eq!(bars[3].x, 310.0);
        assert_eq!(bars[3].width, 80.0);
    }

    #[test]
    fn test_zero_revenue_columns_are_flat() {
        let bars = column_slots(&[0.0, 0.0], 100.0, 50.0);
        assert!(bars.iter().all(|b| b.height == 0.0 && b.y == 50.0));
        assert!(column_slots(&[], 100.0, 50.0).is_empty());
    }

    #[test]
    fn test_pie_angles() {
        let angles = pie_angles(&[750.0, 250.0]);
        assert_eq!(angles[0], (0.0, TAU * 0.75));
        assert!((angles[1].1 - TAU).abs() < 1e-12);

        let empty = pie_angles(&[0.0, 0.0]);
        assert!(empty.iter().all(|(s, e)| s == e && !s.is_nan()));
    }

    #[test]
    fn test_wedge_path() {
        let path = wedge_path(100.0, 100.0, 50.0, 0.0, PI / 2.0).unwrap();
        assert_eq!(path, "M 100.00 100.00 L 100.00 50.00 A 50.00 50.00 0 0 1 150.00 100.00 Z");
        assert!(wedge_path(100.0, 100.0, 50.0, 0.0, PI * 1.5).unwrap().contains(" 0 1 1 "));
        assert_eq!(wedge_path(100.0, 100.0, 50.0, 0.0, TAU), None);
        assert_eq!(wedge_path(100.0, 100.0, 50.0, 1.0, 1.0), None);
    }
}
