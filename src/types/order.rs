use serde::{Deserialize, Serialize};

use crate::types::product::ProductId;

pub type OrderId = i64;

/// Historical record of a purchase. `product_name` and `total_price` are
/// copied at order time and never recomputed from the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    pub product_name: String,
    pub quantity: i64,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub product_id: ProductId,
    pub quantity: i64,
}
