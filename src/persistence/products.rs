//! Product persistence: insert, list, fetch, update, delete.

use sqlx::{PgExecutor, PgPool};

use crate::types::product::{Product, ProductId, ProductPayload};

pub async fn insert_product(
    pool: &PgPool,
    product: &ProductPayload,
) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, price, stock) VALUES ($1, $2, $3) \
         RETURNING id, name, price, stock",
    )
    .bind(&product.name)
    .bind(product.price)
    .bind(product.stock)
    .fetch_one(pool)
    .await
}

pub async fn list_products(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>("SELECT id, name, price, stock FROM products ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn get_product_by_id(
    pool: &PgPool,
    id: ProductId,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>("SELECT id, name, price, stock FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Fetch and row-lock a product for the rest of the enclosing transaction.
pub async fn lock_product_by_id<'e, E>(
    executor: E,
    id: ProductId,
) -> Result<Option<Product>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Product>(
        "SELECT id, name, price, stock FROM products WHERE id = $1 FOR UPDATE",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn update_product(
    pool: &PgPool,
    id: ProductId,
    product: &ProductPayload,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        "UPDATE products SET name = $1, price = $2, stock = $3 WHERE id = $4 \
         RETURNING id, name, price, stock",
    )
    .bind(&product.name)
    .bind(product.price)
    .bind(product.stock)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn decrement_stock<'e, E>(
    executor: E,
    id: ProductId,
    quantity: i64,
) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query("UPDATE products SET stock = stock - $1 WHERE id = $2")
        .bind(quantity)
        .bind(id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Returns whether a row was deleted.
pub async fn delete_product(pool: &PgPool, id: ProductId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
