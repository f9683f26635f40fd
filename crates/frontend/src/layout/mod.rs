pub mod center;
pub mod global_context;
pub mod left;
pub mod toast_service;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

use crate::layout::global_context::AppGlobalContext;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Show when=move || ctx.left_open.get()>
                    <aside class="app-sidebar">
                        <left::Sidebar />
                    </aside>
                </Show>

                <main class="app-main">
                    <center::Center />
                </main>
            </div>
        </div>
    }
}
