pub mod api_error;
pub mod envelope;
pub mod form_schema;
pub mod pagination;
pub mod request_generation;
