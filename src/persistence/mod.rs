//! Postgres-backed store: pool, migrations, and table access for products and orders.

mod orders;
mod pool;
mod products;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::store::{order_total, Store};
use crate::types::order::Order;
use crate::types::product::{Product, ProductId, ProductPayload};

pub use pool::{create_pool_and_migrate, run_migrations};
pub use sqlx::PgPool;

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_product(&self, product: &ProductPayload) -> Result<Product> {
        Ok(products::insert_product(&self.pool, product).await?)
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(products::list_products(&self.pool).await?)
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(products::get_product_by_id(&self.pool, id).await?)
    }

    async fn update_product(
        &self,
        id: ProductId,
        product: &ProductPayload,
    ) -> Result<Option<Product>> {
        Ok(products::update_product(&self.pool, id, product).await?)
    }

    async fn delete_product(&self, id: ProductId) -> Result<bool> {
        Ok(products::delete_product(&self.pool, id).await?)
    }

    async fn place_order(&self, product_id: ProductId, quantity: i64) -> Result<Order> {
        // Dropping `tx` on an early return rolls it back.
        let mut tx = self.pool.begin().await?;

        let product = products::lock_product_by_id(&mut *tx, product_id)
            .await?
            .ok_or(AppError::NotFound("Product"))?;
        if product.stock < quantity {
            return Err(AppError::InsufficientStock);
        }

        let total_price = order_total(product.price, quantity)?;
        products::decrement_stock(&mut *tx, product.id, quantity).await?;
        let order = orders::insert_order(&mut *tx, &product.name, quantity, total_price).await?;

        tx.commit().await?;
        Ok(order)
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        Ok(orders::list_orders(&self.pool).await?)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
