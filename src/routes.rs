//! Router assembly.

use crate::handlers::{
    baked_goods_by_price, bakeries, bakery_by_id, index, most_expensive_baked_good,
};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// GET /, /bakeries, /bakeries/:id, /baked_goods/by_price, /baked_goods/most_expensive.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/bakeries", get(bakeries))
        .route("/bakeries/:id", get(bakery_by_id))
        .route("/baked_goods/by_price", get(baked_goods_by_price))
        .route("/baked_goods/most_expensive", get(most_expensive_baked_good))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
