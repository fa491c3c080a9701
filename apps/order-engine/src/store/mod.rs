//! SQLite persistence.
//!
//! [`Database`] owns the connection pool and hands out transactions;
//! [`inventory`] and [`orders`] are repositories written as async
//! functions over a `&mut SqliteConnection`, so the same code runs
//! against a plain pooled connection or inside one shared transaction.

use rust_decimal::Decimal;

use crate::domain::errors::OrderError;
use crate::domain::status::OrderStatus;

mod database;
pub mod inventory;
pub mod orders;

pub use database::Database;

/// Parse a TEXT-stored decimal column.
///
/// SQLite has no decimal type; monetary columns are stored as strings and
/// round-tripped through `rust_decimal`.
pub(crate) fn parse_decimal(value: &str) -> Result<Decimal, OrderError> {
    value
        .parse::<Decimal>()
        .map_err(|e| OrderError::Persistence(format!("invalid decimal '{value}': {e}")))
}

/// Parse a TEXT-stored status column.
pub(crate) fn parse_status(value: &str) -> Result<OrderStatus, OrderError> {
    OrderStatus::parse(value).ok_or_else(|| {
        OrderError::Persistence(format!("invalid order status in store: '{value}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_decimal_accepts_stored_text() {
        assert_eq!(parse_decimal("15.00").unwrap(), dec!(15.00));
        assert_eq!(parse_decimal("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_rejects_garbage() {
        assert!(parse_decimal("not-a-number").is_err());
    }

    #[test]
    fn parse_status_accepts_stored_text() {
        assert_eq!(parse_status("PENDING").unwrap(), OrderStatus::Pending);
    }

    #[test]
    fn parse_status_rejects_garbage() {
        assert!(parse_status("SHREDDED").is_err());
    }
}
