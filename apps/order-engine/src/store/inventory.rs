//! Product and stock repository.
//!
//! Stock reservation is a single conditional `UPDATE` guarded by
//! `current_stock >= ?`, so concurrent placements can never drive stock
//! negative; a zero row count means the guard failed and the caller's
//! transaction must roll back.

use rust_decimal::Decimal;
use sqlx::sqlite::SqliteConnection;
use sqlx::Row;

use crate::domain::errors::OrderError;
use crate::store::parse_decimal;

/// Current stock and display name of a product.
///
/// # Errors
///
/// Returns [`OrderError::ProductNotFound`] if the product does not exist.
pub async fn stock_and_name(
    conn: &mut SqliteConnection,
    product_id: i64,
) -> Result<(i64, String), OrderError> {
    let row = sqlx::query("SELECT current_stock, product_name FROM products WHERE product_id = ?")
        .bind(product_id)
        .fetch_optional(conn)
        .await?
        .ok_or(OrderError::ProductNotFound { product_id })?;

    Ok((
        row.try_get::<i64, _>("current_stock")?,
        row.try_get::<String, _>("product_name")?,
    ))
}

/// Unit price of a product.
///
/// # Errors
///
/// Returns [`OrderError::ProductNotFound`] if the product does not exist.
pub async fn unit_price(
    conn: &mut SqliteConnection,
    product_id: i64,
) -> Result<Decimal, OrderError> {
    let row = sqlx::query("SELECT unit_price FROM products WHERE product_id = ?")
        .bind(product_id)
        .fetch_optional(conn)
        .await?
        .ok_or(OrderError::ProductNotFound { product_id })?;

    parse_decimal(&row.try_get::<String, _>("unit_price")?)
}

/// Atomically reserve `quantity` units of a product.
///
/// The decrement only applies when enough stock remains; check and write
/// happen in one statement, so there is no window for a concurrent
/// placement to oversell.
///
/// # Errors
///
/// Returns [`OrderError::InsufficientStock`] if stock is too low, or
/// [`OrderError::ProductNotFound`] if the product does not exist.
pub async fn decrement_stock(
    conn: &mut SqliteConnection,
    product_id: i64,
    quantity: i64,
) -> Result<(), OrderError> {
    let result = sqlx::query(
        "UPDATE products SET current_stock = current_stock - ? \
         WHERE product_id = ? AND current_stock >= ?",
    )
    .bind(quantity)
    .bind(product_id)
    .bind(quantity)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        // Guard failed: missing product or not enough stock.
        let (_, product_name) = stock_and_name(conn, product_id).await?;
        return Err(OrderError::InsufficientStock {
            product_id,
            product_name,
        });
    }

    Ok(())
}

/// Return every reserved unit of an order back to stock.
///
/// Must run in the same transaction that marks the order cancelled, so
/// the status flip and the restock commit or roll back together.
///
/// # Errors
///
/// Returns an error if any statement fails.
pub async fn restore_stock(conn: &mut SqliteConnection, order_id: i64) -> Result<(), OrderError> {
    let items = sqlx::query("SELECT product_id, quantity FROM order_items WHERE order_id = ?")
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await?;

    for item in items {
        let product_id = item.try_get::<i64, _>("product_id")?;
        let quantity = item.try_get::<i64, _>("quantity")?;
        sqlx::query("UPDATE products SET current_stock = current_stock + ? WHERE product_id = ?")
            .bind(quantity)
            .bind(product_id)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

/// Insert a product; used for seeding and test fixtures.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn insert_product(
    conn: &mut SqliteConnection,
    product_name: &str,
    unit_price: Decimal,
    current_stock: i64,
    reorder_level: i64,
) -> Result<i64, OrderError> {
    let result = sqlx::query(
        "INSERT INTO products (product_name, unit_price, current_stock, reorder_level) \
         VALUES (?, ?, ?, ?)",
    )
    .bind(product_name)
    .bind(unit_price.to_string())
    .bind(current_stock)
    .bind(reorder_level)
    .execute(conn)
    .await?;

    Ok(result.last_insert_rowid())
}
