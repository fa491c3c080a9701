//! Order lifecycle errors.
//!
//! Domain failures are distinguishable from infrastructure failures: the
//! HTTP adapter maps everything except [`OrderError::Persistence`] to a
//! 4xx status. Any multi-step mutation that returns an error has already
//! been rolled back.

use thiserror::Error;

use crate::domain::status::OrderStatus;

/// Errors that can occur in the order lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Placement request carried no line items.
    #[error("Order must contain at least one item")]
    EmptyOrder,

    /// A line item quantity was zero or negative.
    #[error("Quantity must be positive for product {product_id}")]
    InvalidQuantity {
        /// Offending product.
        product_id: i64,
    },

    /// Stock was lower than the requested quantity.
    #[error("Insufficient stock for product {product_name} (id {product_id})")]
    InsufficientStock {
        /// Offending product.
        product_id: i64,
        /// Product name, for the user-facing message.
        product_name: String,
    },

    /// Requested status is not reachable from the current status.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// Current status.
        from: OrderStatus,
        /// Requested status.
        to: OrderStatus,
    },

    /// Cancellation of an order that is already cancelled.
    ///
    /// This is the double-restock guard: stock restoration runs at most
    /// once per order.
    #[error("Order {order_id} is already cancelled")]
    AlreadyCancelled {
        /// Order ID.
        order_id: i64,
    },

    /// Order does not exist.
    #[error("Order not found: {order_id}")]
    OrderNotFound {
        /// Order ID.
        order_id: i64,
    },

    /// Product does not exist.
    #[error("Product not found: {product_id}")]
    ProductNotFound {
        /// Product ID.
        product_id: i64,
    },

    /// Customer does not exist.
    #[error("Customer not found: {customer_id}")]
    CustomerNotFound {
        /// Customer ID.
        customer_id: i64,
    },

    /// Status string from the caller did not parse.
    #[error("Unknown order status: {value}")]
    UnknownStatus {
        /// The rejected input.
        value: String,
    },

    /// Underlying store error; the transaction has been rolled back.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl From<sqlx::Error> for OrderError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}
