//! Order persistence: insert snapshot, list.

use sqlx::{PgExecutor, PgPool};

use crate::types::order::Order;

pub async fn insert_order<'e, E>(
    executor: E,
    product_name: &str,
    quantity: i64,
    total_price: f64,
) -> Result<Order, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Order>(
        "INSERT INTO orders (product_name, quantity, total_price) VALUES ($1, $2, $3) \
         RETURNING id, product_name, quantity, total_price",
    )
    .bind(product_name)
    .bind(quantity)
    .bind(total_price)
    .fetch_one(executor)
    .await
}

pub async fn list_orders(pool: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(
        "SELECT id, product_name, quantity, total_price FROM orders ORDER BY id",
    )
    .fetch_all(pool)
    .await
}
