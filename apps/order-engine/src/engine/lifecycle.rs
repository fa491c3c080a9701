//! Order lifecycle mutations.
//!
//! Each operation runs inside one transaction: either every write in it
//! commits, or the transaction is dropped and everything rolls back,
//! including stock already reserved for earlier line items.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::errors::OrderError;
use crate::domain::models::OrderItemRequest;
use crate::domain::state_machine::OrderStateMachine;
use crate::domain::status::OrderStatus;
use crate::store::{inventory, orders, Database};

/// Order lifecycle engine: placement, status updates, cancellation.
#[derive(Debug, Clone)]
pub struct OrderEngine {
    db: Database,
}

impl OrderEngine {
    /// Create an engine over the given database.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Place an order: reserve stock for every line item, snapshot unit
    /// prices, and commit the header with its final total.
    ///
    /// Stock reservation happens before any order row exists, one
    /// conditional decrement per line item; the first shortfall rolls the
    /// whole placement back, so partially reserved stock is always
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyOrder`] for an itemless request,
    /// [`OrderError::InvalidQuantity`] for a non-positive quantity,
    /// [`OrderError::CustomerNotFound`], [`OrderError::ProductNotFound`],
    /// or [`OrderError::InsufficientStock`]. On any error nothing has
    /// been written.
    pub async fn place_order(
        &self,
        customer_id: i64,
        items: &[OrderItemRequest],
    ) -> Result<i64, OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        for item in items {
            if item.quantity <= 0 {
                return Err(OrderError::InvalidQuantity {
                    product_id: item.product_id,
                });
            }
        }

        let mut tx = self.db.begin().await?;

        if !orders::customer_exists(&mut tx, customer_id).await? {
            return Err(OrderError::CustomerNotFound { customer_id });
        }

        for item in items {
            inventory::decrement_stock(&mut tx, item.product_id, item.quantity).await?;
        }

        let order_id = orders::insert_order(&mut tx, customer_id, Utc::now()).await?;

        let mut total = Decimal::ZERO;
        for item in items {
            let price = inventory::unit_price(&mut tx, item.product_id).await?;
            orders::insert_line_item(&mut tx, order_id, item.product_id, item.quantity, price)
                .await?;
            total += price * Decimal::from(item.quantity);
        }

        orders::set_total_amount(&mut tx, order_id, total).await?;
        tx.commit().await?;

        tracing::info!(order_id, customer_id, %total, "Order placed");
        Ok(order_id)
    }

    /// Move an order to a new status, enforcing the transition table.
    ///
    /// A requested CANCELLED status is routed through [`Self::cancel_order`]
    /// so stock restoration is never skipped.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::OrderNotFound`] or
    /// [`OrderError::InvalidTransition`]; cancellation errors propagate
    /// from [`Self::cancel_order`].
    pub async fn update_status(
        &self,
        order_id: i64,
        requested: OrderStatus,
    ) -> Result<(), OrderError> {
        if requested == OrderStatus::Cancelled {
            return self.cancel_order(order_id).await;
        }

        let mut tx = self.db.begin().await?;

        let current = orders::fetch_status(&mut tx, order_id)
            .await?
            .ok_or(OrderError::OrderNotFound { order_id })?;
        OrderStateMachine::validate_transition(current, requested)?;

        orders::set_status(&mut tx, order_id, requested).await?;
        tx.commit().await?;

        tracing::info!(order_id, from = %current, to = %requested, "Order status updated");
        Ok(())
    }

    /// Cancel an order and return its reserved stock, in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::OrderNotFound`],
    /// [`OrderError::AlreadyCancelled`] for a repeat cancellation (stock
    /// is restored at most once), or [`OrderError::InvalidTransition`]
    /// for a delivered order.
    pub async fn cancel_order(&self, order_id: i64) -> Result<(), OrderError> {
        let mut tx = self.db.begin().await?;

        let current = orders::fetch_status(&mut tx, order_id)
            .await?
            .ok_or(OrderError::OrderNotFound { order_id })?;
        match current {
            OrderStatus::Cancelled => {
                return Err(OrderError::AlreadyCancelled { order_id });
            }
            OrderStatus::Delivered => {
                return Err(OrderError::InvalidTransition {
                    from: current,
                    to: OrderStatus::Cancelled,
                });
            }
            OrderStatus::Pending | OrderStatus::Shipped => {}
        }

        orders::set_status(&mut tx, order_id, OrderStatus::Cancelled).await?;
        inventory::restore_stock(&mut tx, order_id).await?;
        tx.commit().await?;

        tracing::info!(order_id, from = %current, "Order cancelled, stock restored");
        Ok(())
    }
}
