use leptos::prelude::*;

/// SVG path data of the feather-style icons used across the admin
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "plus" => &["M12 5v14", "M5 12h14"],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "refresh" => &["M23 4v6h-6", "M1 20v-6h6", "M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"],
        "edit" => &["M12 20h9", "M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"],
        "trash" => &["M3 6h18", "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6", "M10 11v6", "M14 11v6", "M9 6V4h6v2"],
        "search" => &["M21 21l-4.35-4.35", "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z"],
        "chevron-left" => &["M15 18l-6-6 6-6"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "chevron-down" => &["M6 9l6 6 6-6"],
        "building" => &["M3 22h18", "M6 22V8l6-5 6 5v14", "M9 22v-9h6v9"],
        "door" => &["M3 21h18", "M5 21V3h14v18", "M15 12h.01"],
        "armchair" => &["M5 11V7a3 3 0 0 1 3-3h8a3 3 0 0 1 3 3v4", "M3 11h18v6H3z", "M5 17v3", "M19 17v3"],
        "clock" => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
        "film" => &["M4 2h16v20H4z", "M8 2v20", "M16 2v20", "M4 7h4", "M4 12h16", "M4 17h4", "M16 7h4", "M16 17h4"],
        "ticket" => &["M3 7a2 2 0 0 0 2-2h14a2 2 0 0 0 2 2v3a2 2 0 0 0 0 4v3a2 2 0 0 0-2 2H5a2 2 0 0 0-2-2v-3a2 2 0 0 0 0-4z", "M13 5v14"],
        "coffee" => &["M18 8h1a4 4 0 0 1 0 8h-1", "M2 8h16v9a4 4 0 0 1-4 4H6a4 4 0 0 1-4-4z", "M6 1v3", "M10 1v3", "M14 1v3"],
        "calendar" => &["M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "M16 2v4", "M8 2v4", "M3 10h18"],
        "users" => &["M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2", "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z"],
        "shield" => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
        "chart" => &["M18 20V10", "M12 20V4", "M6 20v-6"],
        "wallet" => &["M2 6h20v14H2z", "M2 10h20", "M16 15h2"],
        "logout" => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "M16 17l5-5-5-5", "M21 12H9"],
        "menu" => &["M3 6h18", "M3 12h18", "M3 18h18"],
        "percent" => &["M19 5 5 19", "M6.5 9a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5z", "M17.5 20a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5z"],
        "key" => &["M21 2l-2 2", "M15.5 7.5l3 3L22 7l-3-3", "M7.5 21a5.5 5.5 0 1 0 0-11 5.5 5.5 0 0 0 0 11z", "M11.4 12.6 19 5"],
        _ => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let paths = icon_paths(name);
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
    .into_any()
}
