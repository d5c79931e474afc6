use serde::{Deserialize, Serialize};

/// Product referenced by tagged videos
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    pub product_id: String,
    pub designer_id: String,
    pub product_name: String,
    pub price_cents: i64,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductPayload {
    pub designer_id: String,
    pub product_name: String,
    pub price_cents: i64,
}
