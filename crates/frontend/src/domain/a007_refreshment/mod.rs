pub mod api;
pub mod resource;

pub use resource::RefreshmentResource;
