use serde::{Deserialize, Serialize};

pub type ProductId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// Body of `POST /products` and `PUT /products/{id}`. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}
