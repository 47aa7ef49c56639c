//! Row types for the two stored record kinds.

use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    /// NULL until the row is first updated.
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub bakery_id: i64,
}

/// A bakery together with every baked good it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct BakeryDetail {
    pub bakery: Bakery,
    pub baked_goods: Vec<BakedGood>,
}

/// A baked good joined to its owning bakery in one row.
///
/// Expects the baked good's own columns plus `bakery_name`,
/// `bakery_created_at` and `bakery_updated_at` aliases. NULL bakery columns
/// (a dangling `bakery_id`) are a decode error, not a missing row.
#[derive(Debug, Clone, PartialEq)]
pub struct BakedGoodWithBakery {
    pub good: BakedGood,
    pub bakery: Bakery,
}

impl<'r> FromRow<'r, SqliteRow> for BakedGoodWithBakery {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let good = BakedGood::from_row(row)?;
        let bakery = Bakery {
            id: good.bakery_id,
            name: row.try_get("bakery_name")?,
            created_at: row.try_get("bakery_created_at")?,
            updated_at: row.try_get("bakery_updated_at")?,
        };
        Ok(Self { good, bakery })
    }
}

#[derive(Debug, Clone)]
pub struct NewBakery {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
}
