//! Read models and placement input.
//!
//! The detail shape is modeled internally as header + line items and only
//! flattened into the denormalized join rows (one row per line item,
//! header fields repeated) at the HTTP boundary, which keeps the wire
//! shape of the original API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::status::OrderStatus;

/// One requested line in a placement: product and quantity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderItemRequest {
    /// Product to order.
    pub product_id: i64,
    /// Quantity; must be positive.
    pub quantity: i64,
}

/// Order summary row for listings, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Order ID.
    pub order_id: i64,
    /// Placement timestamp.
    pub order_date: DateTime<Utc>,
    /// Committed total, fixed at placement.
    pub total_amount: Decimal,
    /// Current lifecycle status.
    pub order_status: OrderStatus,
    /// Customer display name.
    pub customer_name: String,
}

/// Order header fields shared by every detail row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHeader {
    /// Order ID.
    pub order_id: i64,
    /// Placement timestamp.
    pub order_date: DateTime<Utc>,
    /// Committed total.
    pub total_amount: Decimal,
    /// Current lifecycle status.
    pub order_status: OrderStatus,
    /// Customer display name.
    pub customer_name: String,
    /// Customer email.
    pub email: String,
}

/// One line item of a committed order. Immutable after placement; the
/// price snapshot decouples historical totals from later price changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Referenced product.
    pub product_id: i64,
    /// Product display name.
    pub product_name: String,
    /// Ordered quantity.
    pub quantity: i64,
    /// Unit price captured at placement time.
    pub unit_price_at_order: Decimal,
}

/// Full order detail: header plus line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    /// Header fields.
    pub header: OrderHeader,
    /// Line items, in placement order.
    pub items: Vec<OrderLineItem>,
}

/// Denormalized wire row: one per line item, header fields repeated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetailRow {
    /// Order ID.
    pub order_id: i64,
    /// Placement timestamp.
    pub order_date: DateTime<Utc>,
    /// Committed total.
    pub total_amount: Decimal,
    /// Current lifecycle status.
    pub order_status: OrderStatus,
    /// Customer display name.
    pub customer_name: String,
    /// Customer email.
    pub email: String,
    /// Product display name.
    pub product_name: String,
    /// Ordered quantity.
    pub quantity: i64,
    /// Unit price captured at placement time.
    pub unit_price_at_order: Decimal,
}

impl OrderDetail {
    /// Flatten into the denormalized wire shape.
    #[must_use]
    pub fn into_rows(self) -> Vec<OrderDetailRow> {
        let header = self.header;
        self.items
            .into_iter()
            .map(|item| OrderDetailRow {
                order_id: header.order_id,
                order_date: header.order_date,
                total_amount: header.total_amount,
                order_status: header.order_status,
                customer_name: header.customer_name.clone(),
                email: header.email.clone(),
                product_name: item.product_name,
                quantity: item.quantity,
                unit_price_at_order: item.unit_price_at_order,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_detail() -> OrderDetail {
        OrderDetail {
            header: OrderHeader {
                order_id: 1,
                order_date: Utc::now(),
                total_amount: dec!(15.00),
                order_status: OrderStatus::Pending,
                customer_name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            },
            items: vec![
                OrderLineItem {
                    product_id: 10,
                    product_name: "Widget".to_string(),
                    quantity: 3,
                    unit_price_at_order: dec!(5.00),
                },
                OrderLineItem {
                    product_id: 11,
                    product_name: "Gadget".to_string(),
                    quantity: 1,
                    unit_price_at_order: dec!(0.00),
                },
            ],
        }
    }

    #[test]
    fn into_rows_repeats_header_per_item() {
        let rows = make_detail().into_rows();
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.order_id, 1);
            assert_eq!(row.customer_name, "Ada");
            assert_eq!(row.total_amount, dec!(15.00));
        }
        assert_eq!(rows[0].product_name, "Widget");
        assert_eq!(rows[1].product_name, "Gadget");
    }

    #[test]
    fn summary_serializes_status_upper_case() {
        let summary = OrderSummary {
            order_id: 3,
            order_date: Utc::now(),
            total_amount: dec!(1.50),
            order_status: OrderStatus::Shipped,
            customer_name: "Ada".to_string(),
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"SHIPPED\""));
        assert!(json.contains("\"1.50\""));
    }
}
