pub mod api;
pub mod resource;

pub use resource::TypeDayResource;
