//! Persistence abstraction for products and orders.
//!
//! Handlers and services receive a [`SharedStore`] explicitly; there is no
//! process-wide session.

mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::types::order::Order;
use crate::types::product::{Product, ProductId, ProductPayload};

pub use memory::MemoryStore;

pub type SharedStore = Arc<dyn Store>;

#[async_trait]
pub trait Store: Send + Sync {
    /// Persist a new product and return it with its assigned id.
    async fn insert_product(&self, product: &ProductPayload) -> Result<Product>;

    async fn list_products(&self) -> Result<Vec<Product>>;

    /// `None` if no product has this id.
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>>;

    /// Overwrite name, price and stock. `None` if no product has this id.
    async fn update_product(&self, id: ProductId, product: &ProductPayload)
    -> Result<Option<Product>>;

    /// Returns `false` if no product has this id.
    async fn delete_product(&self, id: ProductId) -> Result<bool>;

    /// Decrement the product's stock by `quantity` and record an order
    /// snapshot, as one unit. Orders on the same product are serialized, so
    /// concurrent orders can never oversell.
    ///
    /// Fails with `NotFound` if the product is gone and `InsufficientStock`
    /// if `stock < quantity`; neither path writes anything. A total that
    /// overflows to a non-finite number is a `Validation` error.
    async fn place_order(&self, product_id: ProductId, quantity: i64) -> Result<Order>;

    async fn list_orders(&self) -> Result<Vec<Order>>;

    /// Cheap liveness check used by `GET /health`.
    async fn ping(&self) -> Result<()>;
}

/// `price * quantity`, rejected when it does not fit in a finite `f64`.
pub fn order_total(price: f64, quantity: i64) -> Result<f64> {
    let total = price * quantity as f64;
    if !total.is_finite() {
        return Err(AppError::Validation(
            "total price is too large".to_string(),
        ));
    }
    Ok(total)
}
