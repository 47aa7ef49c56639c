//! Pool construction, table DDL and the inserts used for seeding.
//! The HTTP surface never writes; these helpers exist for the `seed` binary and tests.

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::model::{NewBakedGood, NewBakery};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool for `config.database_url` with foreign keys enforced.
///
/// Connections are never recycled, so a `sqlite::memory:` URL with a single
/// connection keeps its data for the life of the pool.
pub async fn connect(config: &ServerConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?
        .foreign_keys(true)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    tracing::debug!(url = %config.database_url, "database pool ready");
    Ok(pool)
}

/// Create `bakeries` and `baked_goods` if they do not exist. Idempotent.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bakeries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS baked_goods (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME,
            bakery_id INTEGER NOT NULL REFERENCES bakeries(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_baked_goods_price ON baked_goods(price)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_baked_goods_bakery_id ON baked_goods(bakery_id)")
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn insert_bakery(pool: &SqlitePool, bakery: &NewBakery) -> Result<i64, AppError> {
    let id = sqlx::query("INSERT INTO bakeries (name) VALUES (?)")
        .bind(&bakery.name)
        .execute(pool)
        .await?
        .last_insert_rowid();
    Ok(id)
}

/// Fails with a foreign key violation when `bakery_id` does not exist.
pub async fn insert_baked_good(pool: &SqlitePool, good: &NewBakedGood) -> Result<i64, AppError> {
    let id = sqlx::query("INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?)")
        .bind(&good.name)
        .bind(good.price)
        .bind(good.bakery_id)
        .execute(pool)
        .await?
        .last_insert_rowid();
    Ok(id)
}

/// Stamp `updated_at` on a bakery. Returns false when no row matched.
pub async fn touch_bakery(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let affected = sqlx::query("UPDATE bakeries SET updated_at = CURRENT_TIMESTAMP WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(affected > 0)
}

/// Delete every row from both tables in one transaction.
pub async fn clear_all(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM baked_goods").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM bakeries").execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}
