//! Order placement: the only operation that touches products and orders together.

use crate::catalog;
use crate::error::{AppError, Result};
use crate::store::Store;
use crate::types::order::{Order, OrderPayload};

/// Place an order for `payload.quantity` units of `payload.product_id`.
///
/// Checks run in this order: product exists (`NotFound`), quantity is
/// positive (`Validation`), stock suffices (`InsufficientStock`). The stock
/// check is repeated inside the store under its write lock, so two
/// concurrent orders cannot both consume the same units.
pub async fn create_order(store: &dyn Store, payload: &OrderPayload) -> Result<Order> {
    let product = catalog::get_product(store, payload.product_id).await?;

    if payload.quantity <= 0 {
        return Err(AppError::Validation(
            "quantity must be a positive integer".to_string(),
        ));
    }

    let order = match store.place_order(product.id, payload.quantity).await {
        Ok(order) => order,
        Err(AppError::InsufficientStock) => {
            tracing::info!(
                product_id = product.id,
                requested = payload.quantity,
                "order rejected: not enough stock"
            );
            return Err(AppError::InsufficientStock);
        }
        Err(e) => return Err(e),
    };

    tracing::info!(
        order_id = order.id,
        product_id = product.id,
        quantity = order.quantity,
        total_price = order.total_price,
        "order placed"
    );
    Ok(order)
}

pub async fn list_orders(store: &dyn Store) -> Result<Vec<Order>> {
    store.list_orders().await
}
