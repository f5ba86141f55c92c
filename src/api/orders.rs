use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::api::routes::AppState;
use crate::catalog;
use crate::error::{AppError, Result};
use crate::orders;
use crate::types::order::{Order, OrderPayload};

/// The body is read loosely first so that an unknown `product_id` is
/// reported as 404 even when `quantity` is missing or mistyped.
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>)> {
    let Json(body) = body?;
    let payload = match OrderPayload::deserialize(&body) {
        Ok(payload) => payload,
        Err(e) => {
            if let Some(product_id) = body.get("product_id").and_then(Value::as_i64) {
                catalog::get_product(state.store.as_ref(), product_id).await?;
            }
            return Err(AppError::Validation(format!("invalid order body: {e}")));
        }
    };
    let order = orders::create_order(state.store.as_ref(), &payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    Ok(Json(orders::list_orders(state.store.as_ref()).await?))
}
