use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::auth::use_session;
use contracts::system::auth::AdminScope;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    // Runs once when the layout is created
    ctx.init_router_integration(session.scope());

    view! { <Shell /> }
}

/// Shown when storage holds no usable session or the account is not an admin
#[component]
fn SignInRequired() -> impl IntoView {
    view! {
        <div class="sign-in-required">
            <h2>"Sign in required"</h2>
            <p>"Sign in with a super admin or branch admin account to use this dashboard."</p>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated() && session.scope() != AdminScope::None
            fallback=|| view! { <SignInRequired /> }
        >
            <MainLayout />
        </Show>
    }
}
