use crate::dashboards::d100_revenue::RevenueDashboard;
use crate::domain::a001_branch::BranchResource;
use crate::domain::a002_room::RoomResource;
use crate::domain::a003_seat::{SeatResource, TypeSeatResource};
use crate::domain::a004_showtime::ShowTimeResource;
use crate::domain::a005_movie::MovieCatalogResource;
use crate::domain::a006_voucher::VoucherResource;
use crate::domain::a007_refreshment::RefreshmentResource;
use crate::domain::a008_special_date::SpecialDateResource;
use crate::domain::a009_type_day::TypeDayResource;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::resource_manager::ResourceManagerPage;
use crate::system::accounts::{
    AccountDirectoryResource, AdminAccountResource, PermissionResource, RoleResource,
    StaffAccountResource,
};
use crate::system::auth::guard::RequireScope;
use crate::system::auth::use_session;
use leptos::prelude::*;

/// Content of one page
fn page_view(page: Page) -> AnyView {
    let session = use_session();
    let scope = session.scope();
    let branch_id = session.get().and_then(|s| s.branch_id());

    match page {
        Page::Revenue => view! { <RevenueDashboard /> }.into_any(),
        Page::Branches => view! { <ResourceManagerPage resource=BranchResource /> }.into_any(),
        Page::Admins => view! { <ResourceManagerPage resource=AdminAccountResource /> }.into_any(),
        Page::Accounts => {
            view! { <ResourceManagerPage resource=AccountDirectoryResource /> }.into_any()
        }
        Page::Roles => view! { <ResourceManagerPage resource=RoleResource /> }.into_any(),
        Page::Permissions => {
            view! { <ResourceManagerPage resource=PermissionResource /> }.into_any()
        }
        Page::Movies => view! { <ResourceManagerPage resource=MovieCatalogResource /> }.into_any(),
        Page::Vouchers => view! { <ResourceManagerPage resource=VoucherResource /> }.into_any(),
        Page::Refreshments => {
            view! { <ResourceManagerPage resource=RefreshmentResource /> }.into_any()
        }
        Page::SpecialDates => {
            view! { <ResourceManagerPage resource=SpecialDateResource /> }.into_any()
        }
        Page::TypeDays => view! { <ResourceManagerPage resource=TypeDayResource /> }.into_any(),
        Page::TypeSeats => view! { <ResourceManagerPage resource=TypeSeatResource /> }.into_any(),
        Page::Rooms => {
            let resource = RoomResource::new(scope, branch_id);
            view! { <ResourceManagerPage resource=resource /> }.into_any()
        }
        Page::Seats => {
            let resource = SeatResource::new(scope);
            view! { <ResourceManagerPage resource=resource /> }.into_any()
        }
        Page::ShowTimes => {
            let resource = ShowTimeResource::new(scope);
            view! { <ResourceManagerPage resource=resource /> }.into_any()
        }
        Page::Staff => {
            let resource = StaffAccountResource::new(scope, branch_id);
            view! { <ResourceManagerPage resource=resource /> }.into_any()
        }
    }
}

/// Active page, guarded by the scopes it allows
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div data-zone="center" class="app-main__content">
            {move || {
                let page = ctx.active.get();
                view! {
                    <RequireScope allowed=page.scopes()>
                        {page_view(page)}
                    </RequireScope>
                }
            }}
        </div>
    }
}
