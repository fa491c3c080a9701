//! Database handle and transaction coordinator.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::domain::errors::OrderError;

/// Schema statements, applied idempotently at startup.
///
/// Monetary columns are TEXT (see `parse_decimal`), `order_date` is
/// RFC 3339 TEXT so `ORDER BY order_date DESC` sorts chronologically.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS customers (
        customer_id   INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_name TEXT NOT NULL,
        email         TEXT NOT NULL,
        phone         TEXT,
        address       TEXT
    )",
    "CREATE TABLE IF NOT EXISTS products (
        product_id    INTEGER PRIMARY KEY AUTOINCREMENT,
        product_name  TEXT NOT NULL,
        unit_price    TEXT NOT NULL,
        current_stock INTEGER NOT NULL DEFAULT 0 CHECK (current_stock >= 0),
        reorder_level INTEGER NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        order_id     INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id  INTEGER NOT NULL REFERENCES customers(customer_id),
        order_date   TEXT NOT NULL,
        total_amount TEXT NOT NULL DEFAULT '0',
        order_status TEXT NOT NULL DEFAULT 'PENDING'
    )",
    "CREATE TABLE IF NOT EXISTS order_items (
        order_id            INTEGER NOT NULL REFERENCES orders(order_id),
        product_id          INTEGER NOT NULL REFERENCES products(product_id),
        quantity            INTEGER NOT NULL CHECK (quantity > 0),
        unit_price_at_order TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_order_items_order_id ON order_items(order_id)",
];

/// Shared database handle.
///
/// Wraps the pool and acts as the transaction coordinator: every
/// multi-step mutation runs inside a transaction from [`Database::begin`].
/// Commit is explicit; dropping the transaction on any error path rolls
/// back, and the connection returns to the pool on every exit.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database at `url` (e.g. `sqlite://orders.db`),
    /// creating the file if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the pool cannot
    /// connect.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, OrderError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| OrderError::Persistence(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        tracing::info!(max_connections, "SQLite connection pool initialized");

        Ok(Self { pool })
    }

    /// In-memory database on a single connection; used by tests and demos.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened.
    pub async fn in_memory() -> Result<Self, OrderError> {
        Self::connect("sqlite::memory:", 1).await
    }

    /// Apply the schema statements.
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails.
    pub async fn init_schema(&self) -> Result<(), OrderError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        tracing::debug!("Database schema initialized");
        Ok(())
    }

    /// The underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Begin a transaction holding one pooled connection.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection can be acquired.
    pub async fn begin(&self) -> Result<Transaction<'_, Sqlite>, OrderError> {
        Ok(self.pool.begin().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();
        db.init_schema().await.unwrap();
    }

    #[tokio::test]
    async fn dropped_transaction_rolls_back() {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();

        {
            let mut tx = db.begin().await.unwrap();
            sqlx::query("INSERT INTO customers (customer_name, email) VALUES ('Ada', 'a@x')")
                .execute(&mut *tx)
                .await
                .unwrap();
            // dropped without commit
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn committed_transaction_persists() {
        let db = Database::in_memory().await.unwrap();
        db.init_schema().await.unwrap();

        let mut tx = db.begin().await.unwrap();
        sqlx::query("INSERT INTO customers (customer_name, email) VALUES ('Ada', 'a@x')")
            .execute(&mut *tx)
            .await
            .unwrap();
        tx.commit().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
