use contracts::system::auth::AdminScope;
use leptos::prelude::*;

use super::context::use_session;

/// Renders children only for accounts with one of the allowed scopes
#[component]
pub fn RequireScope(allowed: &'static [AdminScope], children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || allowed.contains(&session.scope())
            fallback=|| view! { <div class="alert alert--error">"Access denied. Admin privileges required."</div> }
        >
            {children()}
        </Show>
    }
}
