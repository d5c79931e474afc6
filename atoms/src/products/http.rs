use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::CreateProductPayload;
use super::service;
use crate::error::ApiError;
use crate::http::{error_response, json_response, parse_json};

/// HTTP Handler: POST /products
pub async fn create_product_handler(
    client: &DynamoClient,
    table_name: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: CreateProductPayload = match parse_json(body) {
        Ok(p) => p,
        Err(e) => return error_response("Invalid request body", &e),
    };
    if payload.product_name.trim().is_empty() {
        return error_response(
            "Invalid request body",
            &ApiError::Validation("product_name is required".to_string()),
        );
    }

    match service::create_product(client, table_name, payload).await {
        Ok(product) => json_response(
            StatusCode::CREATED,
            serde_json::json!({"message": "Product created successfully", "product": product}),
        ),
        Err(e) => error_response("Failed to create product", &e),
    }
}

/// HTTP Handler: GET /products/{id}
pub async fn get_product_handler(
    client: &DynamoClient,
    table_name: &str,
    product_id: &str,
) -> Result<Response<Body>, Error> {
    match service::get_product(client, table_name, product_id).await {
        Ok(product) => json_response(
            StatusCode::OK,
            serde_json::json!({"message": "Product fetched successfully", "product": product}),
        ),
        Err(e) => error_response("Failed to fetch product", &e),
    }
}
