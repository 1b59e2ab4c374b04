pub mod cors;
pub mod error_response_resource;
pub mod openapi;
