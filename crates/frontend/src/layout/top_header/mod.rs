//! Top bar: sidebar toggle, app title, signed-in account and sign-out.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::use_session;
use contracts::system::auth::AdminScope;
use leptos::prelude::*;

fn scope_label(scope: AdminScope) -> &'static str {
    match scope {
        AdminScope::SuperAdmin => "Super admin",
        AdminScope::BranchAdmin => "Branch admin",
        AdminScope::None => "",
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let user_name = move || {
        session
            .get()
            .map(|s| s.account.full_name.unwrap_or(s.account.email))
            .unwrap_or_default()
    };

    let sign_out = move |_| {
        log::info!("Signing out");
        session.sign_out();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Cinema Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{user_name}</span>
                    <span class="top-header__role">{move || scope_label(session.scope())}</span>
                </div>

                <button class="top-header__icon-btn" on:click=sign_out title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
