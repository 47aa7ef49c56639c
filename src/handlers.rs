//! HTTP handlers for the read-only bakery endpoints.

use crate::error::AppError;
use crate::response::{BakedGoodWithBakeryView, BakeryDetailView, BakeryView};
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

pub async fn index() -> Html<&'static str> {
    Html("<h1>Bakery GET API</h1>")
}

pub async fn bakeries(State(state): State<AppState>) -> Result<Json<Vec<BakeryView>>, AppError> {
    let rows = CatalogService::list_bakeries(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// A segment that is not an integer in `0..=i64::MAX` gets a bare 404, as if no route matched.
pub async fn bakery_by_id(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let id = match id {
        Ok(Path(id)) if id >= 0 => id,
        _ => return Ok(StatusCode::NOT_FOUND.into_response()),
    };
    let detail = CatalogService::get_bakery(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Bakery not found"))?;
    Ok(Json(BakeryDetailView::from(detail)).into_response())
}

pub async fn baked_goods_by_price(
    State(state): State<AppState>,
) -> Result<Json<Vec<BakedGoodWithBakeryView>>, AppError> {
    let rows = CatalogService::list_baked_goods_by_price_desc(&state.pool).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

pub async fn most_expensive_baked_good(
    State(state): State<AppState>,
) -> Result<Json<BakedGoodWithBakeryView>, AppError> {
    let row = CatalogService::get_most_expensive_baked_good(&state.pool)
        .await?
        .ok_or(AppError::NotFound("No baked goods found"))?;
    Ok(Json(row.into()))
}
