pub mod api;
pub mod resource;

pub use resource::{
    AccountDirectoryResource, AdminAccountResource, PermissionResource, RoleResource, StaffAccountResource,
};
