//! Verity API Library
//!
//! This crate provides the HTTP handlers, middleware, and application setup
//! for the image analysis service.

mod api_doc;
mod handlers;
mod middleware;
mod services;
mod telemetry;
mod utils;

pub mod constants;
pub mod error;
pub mod setup;
pub mod state;

pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
