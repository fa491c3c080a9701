// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value
    )
)]

//! Order Engine - inventory/order-management core.
//!
//! The hard part of this service is the order lifecycle and
//! inventory-consistency engine: placement validates stock and creates an
//! order with its line items atomically, decrementing inventory and
//! snapshotting unit prices; status updates move through a validated
//! transition graph; cancellation restores stock exactly once.
//!
//! # Layers (inside -> outside)
//!
//! - [`domain`]: status enum, transition table, errors, read models. No I/O.
//! - [`store`]: SQLite persistence. The conditional stock decrement lives
//!   here; repositories are functions over a connection so they compose
//!   inside one transaction.
//! - [`engine`]: the lifecycle operations (place / update status / cancel)
//!   and the read-side query service.
//! - [`server`]: axum REST adapter mapping domain errors to status codes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Runtime configuration from environment variables.
pub mod config;

/// Domain layer - order lifecycle types with no external dependencies.
pub mod domain;

/// Lifecycle engine and query service.
pub mod engine;

/// HTTP adapter (axum).
pub mod server;

/// SQLite persistence: database handle, inventory store, order repository.
pub mod store;

pub use domain::errors::OrderError;
pub use domain::models::{
    OrderDetail, OrderDetailRow, OrderHeader, OrderItemRequest, OrderLineItem, OrderSummary,
};
pub use domain::state_machine::OrderStateMachine;
pub use domain::status::OrderStatus;
pub use engine::{OrderEngine, OrderQueryService};
pub use server::{AppState, create_router};
pub use store::Database;
