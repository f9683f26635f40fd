use crate::shared::icons::icon;
use contracts::shared::pagination::{page_buttons, PageButton};
use leptos::prelude::*;

/// Prev/next plus numbered page buttons, pages are 1-based
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u64>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u64>,

    /// Callback when page changes
    on_page_change: Callback<u64>,
) -> impl IntoView {
    let buttons = move || {
        let current = current_page.get();
        page_buttons(current, total_pages.get())
            .into_iter()
            .map(|button| match button {
                PageButton::Page(page) => view! {
                    <button
                        class="pagination-btn"
                        class:pagination-btn--active=page == current
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_page_change.run(page);
                        }
                    >
                        {page.to_string()}
                    </button>
                }
                .into_any(),
                PageButton::Ellipsis => view! { <span class="pagination-ellipsis">"..."</span> }.into_any(),
            })
            .collect_view()
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let page = current_page.get();
                        if page > 1 {
                            on_page_change.run(page - 1);
                        }
                    }
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {buttons}
                <button
                    class="pagination-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let page = current_page.get();
                        if page < total_pages.get() {
                            on_page_change.run(page + 1);
                        }
                    }
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </Show>
    }
}
