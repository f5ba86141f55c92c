//! In-memory store: used when no database is configured, and by tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::store::{order_total, Store};
use crate::types::order::{Order, OrderId};
use crate::types::product::{Product, ProductId, ProductPayload};

#[derive(Debug, Default)]
struct Tables {
    products: BTreeMap<ProductId, Product>,
    orders: BTreeMap<OrderId, Order>,
    last_product_id: ProductId,
    last_order_id: OrderId,
}

/// Both tables sit behind one lock; every mutation holds the write guard
/// for its whole read-check-write sequence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_product(&self, product: &ProductPayload) -> Result<Product> {
        let mut guard = self.tables.write().await;
        guard.last_product_id += 1;
        let stored = Product {
            id: guard.last_product_id,
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
        };
        guard.products.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let guard = self.tables.read().await;
        Ok(guard.products.values().cloned().collect())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>> {
        let guard = self.tables.read().await;
        Ok(guard.products.get(&id).cloned())
    }

    async fn update_product(
        &self,
        id: ProductId,
        product: &ProductPayload,
    ) -> Result<Option<Product>> {
        let mut guard = self.tables.write().await;
        let Some(existing) = guard.products.get_mut(&id) else {
            return Ok(None);
        };
        existing.name = product.name.clone();
        existing.price = product.price;
        existing.stock = product.stock;
        Ok(Some(existing.clone()))
    }

    async fn delete_product(&self, id: ProductId) -> Result<bool> {
        let mut guard = self.tables.write().await;
        Ok(guard.products.remove(&id).is_some())
    }

    async fn place_order(&self, product_id: ProductId, quantity: i64) -> Result<Order> {
        let mut guard = self.tables.write().await;
        let tables = &mut *guard;

        let product = tables
            .products
            .get_mut(&product_id)
            .ok_or(AppError::NotFound("Product"))?;
        if product.stock < quantity {
            return Err(AppError::InsufficientStock);
        }
        let total_price = order_total(product.price, quantity)?;

        product.stock -= quantity;
        tables.last_order_id += 1;
        let order = Order {
            id: tables.last_order_id,
            product_name: product.name.clone(),
            quantity,
            total_price,
        };
        tables.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        let guard = self.tables.read().await;
        Ok(guard.orders.values().cloned().collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
