use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{Value, json};

use crate::api::routes::AppState;
use crate::catalog;
use crate::error::Result;
use crate::types::product::{Product, ProductId, ProductPayload};

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(payload) = payload?;
    let product = catalog::create_product(state.store.as_ref(), &payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(catalog::list_products(state.store.as_ref()).await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Product>> {
    let Path(id) = id?;
    Ok(Json(catalog::get_product(state.store.as_ref(), id).await?))
}

pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<ProductId>, PathRejection>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>> {
    let Path(id) = id?;
    // A missing product wins over a malformed body.
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            catalog::get_product(state.store.as_ref(), id).await?;
            return Err(rejection.into());
        }
    };
    Ok(Json(
        catalog::update_product(state.store.as_ref(), id, &payload).await?,
    ))
}

pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Value>> {
    let Path(id) = id?;
    catalog::delete_product(state.store.as_ref(), id).await?;
    Ok(Json(json!({ "message": "Product deleted" })))
}
