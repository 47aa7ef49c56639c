//! JSON views returned by the handlers. Field sets are fixed per view.

use crate::model::{BakedGood, BakedGoodWithBakery, Bakery, BakeryDetail};
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Flat bakery: own fields only.
#[derive(Debug, Serialize)]
pub struct BakeryView {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<Bakery> for BakeryView {
    fn from(b: Bakery) -> Self {
        Self {
            id: b.id,
            name: b.name,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Baked good as listed inside a bakery detail.
#[derive(Debug, Serialize)]
pub struct BakedGoodItemView {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub bakery_id: i64,
}

impl From<BakedGood> for BakedGoodItemView {
    fn from(g: BakedGood) -> Self {
        Self {
            id: g.id,
            name: g.name,
            price: g.price,
            created_at: g.created_at,
            updated_at: g.updated_at,
            bakery_id: g.bakery_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BakeryDetailView {
    #[serde(flatten)]
    pub bakery: BakeryView,
    pub baked_goods: Vec<BakedGoodItemView>,
}

impl From<BakeryDetail> for BakeryDetailView {
    fn from(d: BakeryDetail) -> Self {
        Self {
            bakery: d.bakery.into(),
            baked_goods: d.baked_goods.into_iter().map(Into::into).collect(),
        }
    }
}

/// Baked good with its bakery nested one level deep. No `bakery_id` key.
#[derive(Debug, Serialize)]
pub struct BakedGoodWithBakeryView {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub bakery: BakeryView,
}

impl From<BakedGoodWithBakery> for BakedGoodWithBakeryView {
    fn from(row: BakedGoodWithBakery) -> Self {
        let BakedGoodWithBakery { good, bakery } = row;
        Self {
            id: good.id,
            name: good.name,
            price: good.price,
            created_at: good.created_at,
            updated_at: good.updated_at,
            bakery: bakery.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn ts(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(h, 0, 0))
            .unwrap()
    }

    fn bakery() -> Bakery {
        Bakery {
            id: 7,
            name: "Sweet Surrender".into(),
            created_at: ts(9),
            updated_at: None,
        }
    }

    fn croissant() -> BakedGood {
        BakedGood {
            id: 3,
            name: "Croissant".into(),
            price: 3.5,
            created_at: ts(10),
            updated_at: Some(ts(11)),
            bakery_id: 7,
        }
    }

    #[test]
    fn detail_view_flattens_bakery_fields() {
        let view = BakeryDetailView::from(BakeryDetail {
            bakery: bakery(),
            baked_goods: vec![croissant()],
        });
        assert_eq!(
            serde_json::to_value(view).unwrap(),
            json!({
                "id": 7,
                "name": "Sweet Surrender",
                "created_at": "2024-03-01T09:00:00",
                "updated_at": null,
                "baked_goods": [{
                    "id": 3,
                    "name": "Croissant",
                    "price": 3.5,
                    "created_at": "2024-03-01T10:00:00",
                    "updated_at": "2024-03-01T11:00:00",
                    "bakery_id": 7
                }]
            })
        );
    }

    #[test]
    fn nested_view_carries_bakery_object_and_no_foreign_key() {
        let view = BakedGoodWithBakeryView::from(BakedGoodWithBakery {
            good: croissant(),
            bakery: bakery(),
        });
        let value = serde_json::to_value(view).unwrap();
        assert!(value.get("bakery_id").is_none());
        assert_eq!(
            value["bakery"],
            json!({
                "id": 7,
                "name": "Sweet Surrender",
                "created_at": "2024-03-01T09:00:00",
                "updated_at": null
            })
        );
        assert_eq!(value["price"], json!(3.5));
    }
}
