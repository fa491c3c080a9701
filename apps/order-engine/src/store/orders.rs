//! Order and customer repository.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::Row;

use crate::domain::errors::OrderError;
use crate::domain::models::{OrderDetail, OrderHeader, OrderLineItem, OrderSummary};
use crate::domain::status::OrderStatus;
use crate::store::{parse_decimal, parse_status};

/// Insert an order header in its initial state (PENDING, total 0).
///
/// The real total is written by [`set_total_amount`] once every line item
/// has been priced, inside the same transaction.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn insert_order(
    conn: &mut SqliteConnection,
    customer_id: i64,
    order_date: DateTime<Utc>,
) -> Result<i64, OrderError> {
    let result = sqlx::query(
        "INSERT INTO orders (customer_id, order_date, total_amount, order_status) \
         VALUES (?, ?, '0', 'PENDING')",
    )
    .bind(customer_id)
    .bind(order_date)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Insert one line item with its price snapshot.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn insert_line_item(
    conn: &mut SqliteConnection,
    order_id: i64,
    product_id: i64,
    quantity: i64,
    unit_price_at_order: Decimal,
) -> Result<(), OrderError> {
    sqlx::query(
        "INSERT INTO order_items (order_id, product_id, quantity, unit_price_at_order) \
         VALUES (?, ?, ?, ?)",
    )
    .bind(order_id)
    .bind(product_id)
    .bind(quantity)
    .bind(unit_price_at_order.to_string())
    .execute(conn)
    .await?;

    Ok(())
}

/// Write the final order total.
///
/// # Errors
///
/// Returns an error if the update fails.
pub async fn set_total_amount(
    conn: &mut SqliteConnection,
    order_id: i64,
    total: Decimal,
) -> Result<(), OrderError> {
    sqlx::query("UPDATE orders SET total_amount = ? WHERE order_id = ?")
        .bind(total.to_string())
        .bind(order_id)
        .execute(conn)
        .await?;

    Ok(())
}

/// Current status of an order, or `None` if the order does not exist.
///
/// # Errors
///
/// Returns an error if the query fails or the stored status is corrupt.
pub async fn fetch_status(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Option<OrderStatus>, OrderError> {
    let row = sqlx::query("SELECT order_status FROM orders WHERE order_id = ?")
        .bind(order_id)
        .fetch_optional(conn)
        .await?;

    match row {
        Some(row) => Ok(Some(parse_status(&row.try_get::<String, _>("order_status")?)?)),
        None => Ok(None),
    }
}

/// Set the status of an order. Transition validation is the caller's job.
///
/// # Errors
///
/// Returns an error if the update fails.
pub async fn set_status(
    conn: &mut SqliteConnection,
    order_id: i64,
    status: OrderStatus,
) -> Result<(), OrderError> {
    sqlx::query("UPDATE orders SET order_status = ? WHERE order_id = ?")
        .bind(status.as_str())
        .bind(order_id)
        .execute(conn)
        .await?;

    Ok(())
}

fn row_to_summary(row: &SqliteRow) -> Result<OrderSummary, OrderError> {
    Ok(OrderSummary {
        order_id: row.try_get("order_id")?,
        order_date: row.try_get("order_date")?,
        total_amount: parse_decimal(&row.try_get::<String, _>("total_amount")?)?,
        order_status: parse_status(&row.try_get::<String, _>("order_status")?)?,
        customer_name: row.try_get("customer_name")?,
    })
}

/// All orders as summaries, newest first (order id breaks date ties).
///
/// # Errors
///
/// Returns an error if the query fails or a row does not decode.
pub async fn list_summaries(conn: &mut SqliteConnection) -> Result<Vec<OrderSummary>, OrderError> {
    let rows = sqlx::query(
        "SELECT o.order_id, o.order_date, o.total_amount, o.order_status, c.customer_name \
         FROM orders o \
         JOIN customers c ON c.customer_id = o.customer_id \
         ORDER BY o.order_date DESC, o.order_id DESC",
    )
    .fetch_all(conn)
    .await?;

    rows.iter().map(row_to_summary).collect()
}

/// Full detail of one order: header plus its line items, or `None` if the
/// order does not exist.
///
/// # Errors
///
/// Returns an error if the query fails or a row does not decode.
pub async fn fetch_detail(
    conn: &mut SqliteConnection,
    order_id: i64,
) -> Result<Option<OrderDetail>, OrderError> {
    let rows = sqlx::query(
        "SELECT o.order_id, o.order_date, o.total_amount, o.order_status, \
                c.customer_name, c.email, \
                oi.product_id, oi.quantity, oi.unit_price_at_order, p.product_name \
         FROM orders o \
         JOIN customers c ON c.customer_id = o.customer_id \
         JOIN order_items oi ON oi.order_id = o.order_id \
         JOIN products p ON p.product_id = oi.product_id \
         WHERE o.order_id = ? \
         ORDER BY oi.rowid",
    )
    .bind(order_id)
    .fetch_all(conn)
    .await?;

    let Some(first) = rows.first() else {
        return Ok(None);
    };

    let header = OrderHeader {
        order_id: first.try_get("order_id")?,
        order_date: first.try_get("order_date")?,
        total_amount: parse_decimal(&first.try_get::<String, _>("total_amount")?)?,
        order_status: parse_status(&first.try_get::<String, _>("order_status")?)?,
        customer_name: first.try_get("customer_name")?,
        email: first.try_get("email")?,
    };

    let items = rows
        .iter()
        .map(|row| {
            Ok(OrderLineItem {
                product_id: row.try_get("product_id")?,
                product_name: row.try_get("product_name")?,
                quantity: row.try_get("quantity")?,
                unit_price_at_order: parse_decimal(
                    &row.try_get::<String, _>("unit_price_at_order")?,
                )?,
            })
        })
        .collect::<Result<Vec<_>, OrderError>>()?;

    Ok(Some(OrderDetail { header, items }))
}

/// Whether a customer exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn customer_exists(
    conn: &mut SqliteConnection,
    customer_id: i64,
) -> Result<bool, OrderError> {
    let row = sqlx::query("SELECT 1 FROM customers WHERE customer_id = ?")
        .bind(customer_id)
        .fetch_optional(conn)
        .await?;

    Ok(row.is_some())
}

/// Insert a customer; used for seeding and test fixtures.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn insert_customer(
    conn: &mut SqliteConnection,
    customer_name: &str,
    email: &str,
) -> Result<i64, OrderError> {
    let result = sqlx::query("INSERT INTO customers (customer_name, email) VALUES (?, ?)")
        .bind(customer_name)
        .bind(email)
        .execute(conn)
        .await?;

    Ok(result.last_insert_rowid())
}
