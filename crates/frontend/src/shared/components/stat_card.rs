use crate::shared::date_utils::{format_money, format_thousands};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatFormat {
    Money,
    Count,
}

fn format_value(val: f64, fmt: StatFormat) -> String {
    match fmt {
        StatFormat::Money => format_money(val),
        StatFormat::Count => format_thousands(val.round() as i64),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary numeric value (None = loading)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: StatFormat,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "-".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
