//! Read queries behind each endpoint.

use crate::error::AppError;
use crate::model::{BakedGood, BakedGoodWithBakery, Bakery, BakeryDetail};
use sqlx::SqlitePool;

const SELECT_BAKERY: &str = "SELECT id, name, created_at, updated_at FROM bakeries";

/// Ties on price go to the lowest id. A good whose bakery is missing still
/// comes back, with NULL bakery columns, and fails to decode.
const SELECT_GOODS_BY_PRICE: &str = r#"
    SELECT g.id, g.name, g.price, g.created_at, g.updated_at, g.bakery_id,
           b.name AS bakery_name,
           b.created_at AS bakery_created_at,
           b.updated_at AS bakery_updated_at
    FROM baked_goods g
    LEFT JOIN bakeries b ON b.id = g.bakery_id
    ORDER BY g.price DESC, g.id ASC
"#;

pub struct CatalogService;

impl CatalogService {
    /// All bakeries in id order.
    pub async fn list_bakeries(pool: &SqlitePool) -> Result<Vec<Bakery>, AppError> {
        let sql = format!("{} ORDER BY id", SELECT_BAKERY);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Bakery>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// One bakery and its baked goods, or None when `id` does not exist.
    pub async fn get_bakery(pool: &SqlitePool, id: i64) -> Result<Option<BakeryDetail>, AppError> {
        let sql = format!("{} WHERE id = ?", SELECT_BAKERY);
        tracing::debug!(sql = %sql, id, "query");
        let Some(bakery) = sqlx::query_as::<_, Bakery>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let goods_sql = "SELECT id, name, price, created_at, updated_at, bakery_id \
                         FROM baked_goods WHERE bakery_id = ? ORDER BY id";
        tracing::debug!(sql = %goods_sql, bakery_id = id, "query");
        let baked_goods = sqlx::query_as::<_, BakedGood>(goods_sql)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(BakeryDetail {
            bakery,
            baked_goods,
        }))
    }

    pub async fn list_baked_goods_by_price_desc(
        pool: &SqlitePool,
    ) -> Result<Vec<BakedGoodWithBakery>, AppError> {
        tracing::debug!(sql = %SELECT_GOODS_BY_PRICE, "query");
        let rows = sqlx::query_as::<_, BakedGoodWithBakery>(SELECT_GOODS_BY_PRICE)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// First row of the by-price ordering.
    pub async fn get_most_expensive_baked_good(
        pool: &SqlitePool,
    ) -> Result<Option<BakedGoodWithBakery>, AppError> {
        let sql = format!("{} LIMIT 1", SELECT_GOODS_BY_PRICE);
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, BakedGoodWithBakery>(&sql)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
