use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::CreateUserPayload;
use super::service;
use crate::error::ApiError;
use crate::http::{error_response, json_response, parse_json};

/// HTTP Handler: POST /users
pub async fn create_user_handler(
    client: &DynamoClient,
    table_name: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: CreateUserPayload = match parse_json(body) {
        Ok(p) => p,
        Err(e) => return error_response("Invalid request body", &e),
    };
    if payload.user_email.trim().is_empty() {
        return error_response(
            "Invalid request body",
            &ApiError::Validation("user_email is required".to_string()),
        );
    }

    match service::create_user(client, table_name, payload).await {
        Ok(user) => json_response(
            StatusCode::CREATED,
            serde_json::json!({"message": "User created successfully", "user": user}),
        ),
        Err(e) => error_response("Failed to create user", &e),
    }
}

/// HTTP Handler: GET /users/{id}
pub async fn get_user_handler(
    client: &DynamoClient,
    table_name: &str,
    user_id: &str,
) -> Result<Response<Body>, Error> {
    match service::get_user(client, table_name, user_id).await {
        Ok(user) => json_response(
            StatusCode::OK,
            serde_json::json!({"message": "User fetched successfully", "user": user}),
        ),
        Err(e) => error_response("Failed to fetch user", &e),
    }
}
