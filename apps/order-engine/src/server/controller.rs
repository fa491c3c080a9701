//! HTTP handlers and router.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post, put};
use axum::Router;

use crate::domain::errors::OrderError;
use crate::domain::status::OrderStatus;
use crate::engine::{OrderEngine, OrderQueryService};
use crate::server::request::{PlaceOrderRequest, UpdateStatusRequest};
use crate::server::response::{
    ErrorResponse, HealthResponse, MessageResponse, PlaceOrderResponse,
};

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Lifecycle engine.
    pub engine: Arc<OrderEngine>,
    /// Read-side queries.
    pub queries: Arc<OrderQueryService>,
    /// Version reported by the health endpoint.
    pub version: String,
}

/// Build the application router.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/orders", post(place_order).get(list_orders))
        .route("/api/orders/{id}", get(order_detail).delete(cancel_order))
        .route("/api/orders/{id}/status", put(update_status))
        .with_state(state)
}

/// Map a domain error to its HTTP status and body.
///
/// Internal failures get a generic body; the detail goes to the log only.
fn error_response(err: &OrderError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match err {
        OrderError::EmptyOrder
        | OrderError::InvalidQuantity { .. }
        | OrderError::InsufficientStock { .. }
        | OrderError::InvalidTransition { .. }
        | OrderError::AlreadyCancelled { .. }
        | OrderError::UnknownStatus { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
        OrderError::OrderNotFound { .. }
        | OrderError::ProductNotFound { .. }
        | OrderError::CustomerNotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        OrderError::Persistence(detail) => {
            tracing::error!(%detail, "Persistence failure in HTTP handler");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };
    (status, Json(ErrorResponse { message }))
}

async fn health(State(state): State<AppState>) -> Response {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: state.version.clone(),
    })
    .into_response()
}

async fn place_order(
    State(state): State<AppState>,
    Json(body): Json<PlaceOrderRequest>,
) -> Response {
    match state.engine.place_order(body.customer_id, &body.items).await {
        Ok(order_id) => (
            StatusCode::CREATED,
            Json(PlaceOrderResponse {
                message: "Order placed successfully".to_string(),
                order_id,
            }),
        )
            .into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}

async fn list_orders(State(state): State<AppState>) -> Response {
    match state.queries.list_orders().await {
        Ok(summaries) => Json(summaries).into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}

async fn order_detail(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.queries.order_detail(id).await {
        Ok(detail) => Json(detail.into_rows()).into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateStatusRequest>,
) -> Response {
    let Some(requested) = OrderStatus::parse(&body.status) else {
        return error_response(&OrderError::UnknownStatus { value: body.status }).into_response();
    };

    match state.engine.update_status(id, requested).await {
        Ok(()) => Json(MessageResponse {
            message: "Order status updated successfully".to_string(),
        })
        .into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}

async fn cancel_order(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.engine.cancel_order(id).await {
        Ok(()) => Json(MessageResponse {
            message: "Order cancelled and stock restored".to_string(),
        })
        .into_response(),
        Err(err) => error_response(&err).into_response(),
    }
}
