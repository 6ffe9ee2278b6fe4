//! HTTP middleware

pub mod error_details;
pub mod request_id;
pub mod security_headers;

pub use error_details::error_details_middleware;
pub use request_id::{get_request_id, request_id_middleware};
