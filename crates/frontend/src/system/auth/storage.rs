use contracts::system::auth::{ACCESS_TOKEN_KEY, AUTH_STATE_KEY};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

/// Raw persisted auth store
pub fn get_auth_state() -> Option<String> {
    get_local_storage()?.get_item(AUTH_STATE_KEY).ok()?
}

/// Clear all authentication data
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(AUTH_STATE_KEY);
    }
}
