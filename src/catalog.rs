//! Catalog operations: create, list, fetch, update, delete products.
//! Testable without HTTP.

use crate::error::{AppError, Result};
use crate::store::Store;
use crate::types::product::{Product, ProductId, ProductPayload};

/// Matches the width of `products.name`.
pub const MAX_NAME_LEN: usize = 100;

/// Stock sign is not checked here; it is only enforced when an order is placed.
pub fn validate_product(payload: &ProductPayload) -> Result<()> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    // The name is stored as sent, padding included.
    if payload.name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    if !payload.price.is_finite() || payload.price < 0.0 {
        return Err(AppError::Validation(
            "price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

pub async fn create_product(store: &dyn Store, payload: &ProductPayload) -> Result<Product> {
    validate_product(payload)?;
    let product = store.insert_product(payload).await?;
    tracing::info!(product_id = product.id, name = %product.name, "product created");
    Ok(product)
}

pub async fn list_products(store: &dyn Store) -> Result<Vec<Product>> {
    store.list_products().await
}

pub async fn get_product(store: &dyn Store, id: ProductId) -> Result<Product> {
    store
        .get_product(id)
        .await?
        .ok_or(AppError::NotFound("Product"))
}

/// Overwrites all three fields; there is no partial update.
pub async fn update_product(
    store: &dyn Store,
    id: ProductId,
    payload: &ProductPayload,
) -> Result<Product> {
    // Absent beats malformed: a missing product is a 404 even with a bad body.
    get_product(store, id).await?;
    validate_product(payload)?;
    let product = store
        .update_product(id, payload)
        .await?
        .ok_or(AppError::NotFound("Product"))?;
    tracing::info!(product_id = id, stock = product.stock, "product updated");
    Ok(product)
}

pub async fn delete_product(store: &dyn Store, id: ProductId) -> Result<()> {
    if !store.delete_product(id).await? {
        return Err(AppError::NotFound("Product"));
    }
    tracing::info!(product_id = id, "product deleted");
    Ok(())
}
