//! Response payloads.

use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Body of a successful `POST /api/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceOrderResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// ID of the new order.
    pub order_id: i64,
}

/// Generic success message body.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Error body; the message matches the domain error except for internal
/// failures, which are reported generically.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub message: String,
}
