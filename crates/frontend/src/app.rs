use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::{ToastHost, ToastService};
use crate::routes::routes::AppRoutes;
use crate::system::auth::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    // Toasts outlive page switches
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
            <ToastHost />
        </SessionProvider>
    }
}
