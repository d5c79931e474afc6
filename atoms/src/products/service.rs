use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

use super::model::{CreateProductPayload, Product};
use crate::error::{store_error, ApiError};

/// Product collection layout:
/// PK = "PRODUCT"
/// SK = "PRODUCT#{product_id}"
fn parse_product(product_id: &str, item: &HashMap<String, AttributeValue>) -> Product {
    Product {
        product_id: product_id.to_string(),
        designer_id: item
            .get("designer_id")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        product_name: item
            .get("product_name")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        price_cents: item
            .get("price_cents")
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0),
        created_at: item
            .get("created_at")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
    }
}

/// Create a product for a designer
pub async fn create_product(
    client: &DynamoClient,
    table_name: &str,
    payload: CreateProductPayload,
) -> Result<Product, ApiError> {
    let product_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();

    client
        .put_item()
        .table_name(table_name)
        .item("PK", AttributeValue::S("PRODUCT".to_string()))
        .item("SK", AttributeValue::S(format!("PRODUCT#{}", product_id)))
        .item("designer_id", AttributeValue::S(payload.designer_id.clone()))
        .item(
            "product_name",
            AttributeValue::S(payload.product_name.clone()),
        )
        .item(
            "price_cents",
            AttributeValue::N(payload.price_cents.to_string()),
        )
        .item("created_at", AttributeValue::S(now.clone()))
        .send()
        .await
        .map_err(|e| store_error("put_item", e))?;

    Ok(Product {
        product_id,
        designer_id: payload.designer_id,
        product_name: payload.product_name,
        price_cents: payload.price_cents,
        created_at: now,
    })
}

/// Get a specific product
pub async fn get_product(
    client: &DynamoClient,
    table_name: &str,
    product_id: &str,
) -> Result<Product, ApiError> {
    let result = client
        .get_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("PRODUCT".to_string()))
        .key("SK", AttributeValue::S(format!("PRODUCT#{}", product_id)))
        .send()
        .await
        .map_err(|e| store_error("get_item", e))?;

    if let Some(item) = result.item() {
        Ok(parse_product(product_id, item))
    } else {
        Err(ApiError::NotFound("Product not found".to_string()))
    }
}

/// Load all products; the feed join indexes these by id
pub async fn load_products(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Vec<Product>, ApiError> {
    let result = client
        .query()
        .table_name(table_name)
        .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
        .expression_attribute_values(":pk", AttributeValue::S("PRODUCT".to_string()))
        .expression_attribute_values(":sk_prefix", AttributeValue::S("PRODUCT#".to_string()))
        .send()
        .await
        .map_err(|e| store_error("query", e))?;

    let mut products = Vec::new();
    for item in result.items() {
        if let Some(sk) = item.get("SK").and_then(|v| v.as_s().ok()) {
            if let Some(product_id) = sk.strip_prefix("PRODUCT#") {
                products.push(parse_product(product_id, item));
            }
        }
    }

    Ok(products)
}
