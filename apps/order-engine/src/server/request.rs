//! Request payloads.

use serde::Deserialize;

use crate::domain::models::OrderItemRequest;

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderRequest {
    /// Ordering customer.
    pub customer_id: i64,
    /// Requested line items.
    pub items: Vec<OrderItemRequest>,
}

/// Body of `PUT /api/orders/{id}/status`.
///
/// The status is accepted case-insensitively and validated against the
/// known lifecycle statuses before it reaches the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    /// Requested status, e.g. `"SHIPPED"`.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_order_request_deserializes() {
        let body = r#"{"customer_id": 1, "items": [{"product_id": 2, "quantity": 3}]}"#;
        let req: PlaceOrderRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.customer_id, 1);
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].product_id, 2);
        assert_eq!(req.items[0].quantity, 3);
    }

    #[test]
    fn update_status_request_deserializes() {
        let req: UpdateStatusRequest = serde_json::from_str(r#"{"status": "shipped"}"#).unwrap();
        assert_eq!(req.status, "shipped");
    }
}
