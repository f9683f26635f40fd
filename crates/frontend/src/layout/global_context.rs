use contracts::system::auth::AdminScope;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Every screen reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Revenue,
    Branches,
    Admins,
    Accounts,
    Roles,
    Permissions,
    Movies,
    Vouchers,
    Refreshments,
    SpecialDates,
    TypeDays,
    TypeSeats,
    Rooms,
    Seats,
    ShowTimes,
    Staff,
}

impl Page {
    pub const ALL: [Page; 16] = [
        Page::Revenue,
        Page::Branches,
        Page::Admins,
        Page::Accounts,
        Page::Roles,
        Page::Permissions,
        Page::Movies,
        Page::Vouchers,
        Page::Refreshments,
        Page::SpecialDates,
        Page::TypeDays,
        Page::TypeSeats,
        Page::Rooms,
        Page::Seats,
        Page::ShowTimes,
        Page::Staff,
    ];

    /// Key used in the `?page=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::Branches => "branches",
            Self::Admins => "admins",
            Self::Accounts => "accounts",
            Self::Roles => "roles",
            Self::Permissions => "permissions",
            Self::Movies => "movies",
            Self::Vouchers => "vouchers",
            Self::Refreshments => "refreshments",
            Self::SpecialDates => "special-dates",
            Self::TypeDays => "type-days",
            Self::TypeSeats => "type-seats",
            Self::Rooms => "rooms",
            Self::Seats => "seats",
            Self::ShowTimes => "showtimes",
            Self::Staff => "staff",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::Branches => "Branches",
            Self::Admins => "Branch admins",
            Self::Accounts => "All accounts",
            Self::Roles => "Roles",
            Self::Permissions => "Permissions",
            Self::Movies => "Movies",
            Self::Vouchers => "Vouchers",
            Self::Refreshments => "Refreshments",
            Self::SpecialDates => "Special dates",
            Self::TypeDays => "Day types",
            Self::TypeSeats => "Seat types",
            Self::Rooms => "Rooms",
            Self::Seats => "Seats",
            Self::ShowTimes => "Showtimes",
            Self::Staff => "Staff",
        }
    }

    /// Scopes that may open this page
    pub fn scopes(&self) -> &'static [AdminScope] {
        const BOTH: &[AdminScope] = &[AdminScope::SuperAdmin, AdminScope::BranchAdmin];
        const CHAIN: &[AdminScope] = &[AdminScope::SuperAdmin];
        match self {
            Self::Revenue | Self::Rooms | Self::Seats | Self::ShowTimes | Self::Staff => BOTH,
            _ => CHAIN,
        }
    }

    pub fn allowed_for(&self, scope: AdminScope) -> bool {
        self.scopes().contains(&scope)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::Revenue),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the active page from `?page=` and keep the URL in sync.
    /// A page the account may not open falls back to the revenue screen.
    pub fn init_router_integration(&self, scope: AdminScope) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_search(&search) {
            if page.allowed_for(scope) {
                self.active.set(page);
            } else {
                log::warn!("Page '{}' is not available for {:?}", page.key(), scope);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("page", page.key())])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open(&self, page: Page) {
        log::debug!("open page '{}'", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn page_from_search(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("page").and_then(|key| Page::from_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("nope"), None);
    }

    #[test]
    fn test_scope_split() {
        assert!(Page::Branches.allowed_for(AdminScope::SuperAdmin));
        assert!(!Page::Branches.allowed_for(AdminScope::BranchAdmin));
        for page in [Page::Rooms, Page::Seats, Page::ShowTimes, Page::Staff] {
            assert!(page.allowed_for(AdminScope::BranchAdmin));
            assert!(page.allowed_for(AdminScope::SuperAdmin));
        }
        assert!(Page::Revenue.allowed_for(AdminScope::BranchAdmin));
        assert!(Page::Revenue.allowed_for(AdminScope::SuperAdmin));
        assert!(Page::ALL.iter().all(|p| !p.allowed_for(AdminScope::None)));
    }

    #[test]
    fn test_page_from_search() {
        assert_eq!(page_from_search("?page=special-dates"), Some(Page::SpecialDates));
        assert_eq!(page_from_search("?active=a001&page=staff"), Some(Page::Staff));
        assert_eq!(page_from_search(""), None);
    }
}
