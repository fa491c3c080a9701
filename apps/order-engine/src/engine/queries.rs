//! Read-side queries over orders.

use crate::domain::errors::OrderError;
use crate::domain::models::{OrderDetail, OrderSummary};
use crate::store::{orders, Database};

/// Read-only order queries.
#[derive(Debug, Clone)]
pub struct OrderQueryService {
    db: Database,
}

impl OrderQueryService {
    /// Create a query service over the given database.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// All orders as summaries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub async fn list_orders(&self) -> Result<Vec<OrderSummary>, OrderError> {
        let mut conn = self.db.pool().acquire().await?;
        orders::list_summaries(&mut conn).await
    }

    /// Full detail of one order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::OrderNotFound`] if the order does not exist.
    pub async fn order_detail(&self, order_id: i64) -> Result<OrderDetail, OrderError> {
        let mut conn = self.db.pool().acquire().await?;
        orders::fetch_detail(&mut conn, order_id)
            .await?
            .ok_or(OrderError::OrderNotFound { order_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::OrderItemRequest;
    use crate::engine::OrderEngine;
    use crate::store::{inventory, orders as order_store};
    use rust_decimal_macros::dec;

    async fn test_db() -> Database {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();
        db
    }

    #[tokio::test]
    async fn list_orders_is_empty_on_fresh_database() {
        let queries = OrderQueryService::new(test_db().await);
        assert!(queries.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn order_detail_missing_order_is_not_found() {
        let queries = OrderQueryService::new(test_db().await);
        let err = queries.order_detail(7).await.unwrap_err();
        assert_eq!(err, OrderError::OrderNotFound { order_id: 7 });
    }

    #[tokio::test]
    async fn placed_orders_show_up_newest_first() {
        let db = test_db().await;
        let (customer, product) = {
            let mut conn = db.pool().acquire().await.unwrap();
            let customer = order_store::insert_customer(&mut conn, "Ada", "ada@example.com")
                .await
                .unwrap();
            let product = inventory::insert_product(&mut conn, "Widget", dec!(5.00), 100, 0)
                .await
                .unwrap();
            (customer, product)
        };

        let engine = OrderEngine::new(db.clone());
        let first = engine
            .place_order(
                customer,
                &[OrderItemRequest {
                    product_id: product,
                    quantity: 1,
                }],
            )
            .await
            .unwrap();
        let second = engine
            .place_order(
                customer,
                &[OrderItemRequest {
                    product_id: product,
                    quantity: 2,
                }],
            )
            .await
            .unwrap();

        let queries = OrderQueryService::new(db);
        let summaries = queries.list_orders().await.unwrap();
        assert_eq!(summaries.len(), 2);
        // Same-second placements fall back to the order id tiebreak.
        assert_eq!(summaries[0].order_id, second);
        assert_eq!(summaries[1].order_id, first);

        let detail = queries.order_detail(second).await.unwrap();
        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.header.total_amount, dec!(10.00));
    }
}
