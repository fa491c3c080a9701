//! HTTP adapter: axum router, request/response DTOs, error mapping.

mod controller;
pub mod request;
pub mod response;

pub use controller::{create_router, AppState};
