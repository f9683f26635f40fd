use contracts::system::auth::{AdminScope, Session};
use leptos::prelude::*;

use super::storage;

/// Signed-in account, read from storage once at startup and shared through
/// context. Pages never parse storage themselves.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<Session>>,
}

impl SessionContext {
    pub fn from_storage() -> Self {
        Self {
            session: RwSignal::new(restore_session()),
        }
    }

    pub fn get(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn scope(&self) -> AdminScope {
        self.session
            .with(|s| s.as_ref().map(|s| s.scope()).unwrap_or(AdminScope::None))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn sign_out(&self) {
        storage::clear_session();
        self.session.set(None);
    }
}

fn restore_session() -> Option<Session> {
    let token = storage::get_access_token()?;
    let auth_state = storage::get_auth_state()?;
    match Session::from_storage(&token, &auth_state) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Stored session ignored: {:#}", e);
            None
        }
    }
}

/// Session provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::from_storage());
    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider not found in component tree")
}
