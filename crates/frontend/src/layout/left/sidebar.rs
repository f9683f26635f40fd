//! Sidebar page switcher, groups filtered by the signed-in account's scope

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::system::auth::use_session;
use contracts::system::auth::AdminScope;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(Page, &'static str)>, // (page, icon)
}

fn menu_groups(scope: AdminScope) -> Vec<MenuGroup> {
    let groups = vec![
        MenuGroup {
            id: "reports",
            label: "Reports",
            items: vec![(Page::Revenue, "chart")],
        },
        MenuGroup {
            id: "chain",
            label: "Chain",
            items: vec![
                (Page::Branches, "building"),
                (Page::Movies, "film"),
                (Page::TypeSeats, "armchair"),
            ],
        },
        MenuGroup {
            id: "branch",
            label: "Branch",
            items: vec![
                (Page::Rooms, "door"),
                (Page::Seats, "armchair"),
                (Page::ShowTimes, "clock"),
                (Page::Staff, "users"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            items: vec![
                (Page::Vouchers, "ticket"),
                (Page::Refreshments, "coffee"),
                (Page::SpecialDates, "calendar"),
                (Page::TypeDays, "percent"),
            ],
        },
        MenuGroup {
            id: "access",
            label: "Access",
            items: vec![
                (Page::Admins, "shield"),
                (Page::Accounts, "users"),
                (Page::Roles, "key"),
                (Page::Permissions, "key"),
            ],
        },
    ];

    groups
        .into_iter()
        .filter_map(|mut group| {
            group.items.retain(|(page, _)| page.allowed_for(scope));
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    // Scope does not change while the app is mounted
    let groups = menu_groups(session.scope());

    let collapsed_groups = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <nav class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div>
                        <div
                            class="app-sidebar__group"
                            on:click=move |_| {
                                collapsed_groups.update(|ids| {
                                    if let Some(pos) = ids.iter().position(|x| *x == group_id) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(group_id);
                                    }
                                });
                            }
                        >
                            <span>{group.label}</span>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || !collapsed_groups.get().contains(&group_id)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=move || !collapsed_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(page, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.active.get() == page
                                            on:click=move |_| ctx.open(page)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{page.title()}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(scope: AdminScope) -> Vec<Page> {
        menu_groups(scope)
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(page, _)| page))
            .collect()
    }

    #[test]
    fn test_branch_admin_menu() {
        let ids: Vec<&str> = menu_groups(AdminScope::BranchAdmin).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["reports", "branch"]);
        assert_eq!(
            pages(AdminScope::BranchAdmin),
            vec![Page::Revenue, Page::Rooms, Page::Seats, Page::ShowTimes, Page::Staff]
        );
    }

    #[test]
    fn test_super_admin_menu_covers_every_page() {
        let ids: Vec<&str> = menu_groups(AdminScope::SuperAdmin).iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["reports", "chain", "branch", "sales", "access"]);
        let pages = pages(AdminScope::SuperAdmin);
        assert_eq!(pages.len(), Page::ALL.len());
        assert!(Page::ALL.iter().all(|p| pages.contains(p)));
    }

    #[test]
    fn test_no_scope_no_menu() {
        assert!(menu_groups(AdminScope::None).is_empty());
    }
}
