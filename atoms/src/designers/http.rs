use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::UpdateStatusPayload;
use super::service;
use crate::http::{error_response, json_response, parse_json};

/// HTTP Handler: POST /designers
///
/// Image uploads are resolved by the lambda layer before this is
/// called; the handler only sees durable URLs.
pub async fn create_designer_handler(
    client: &DynamoClient,
    table_name: &str,
    user_id: &str,
    short_description: &str,
    about_text: &str,
    logo_url: Option<String>,
    background_url: Option<String>,
) -> Result<Response<Body>, Error> {
    match service::create_designer(
        client,
        table_name,
        user_id,
        short_description,
        about_text,
        logo_url,
        background_url,
    )
    .await
    {
        Ok(designer) => json_response(
            StatusCode::CREATED,
            serde_json::json!({"message": "Designer created successfully", "designer": designer}),
        ),
        Err(e) => error_response("Failed to create designer", &e),
    }
}

/// HTTP Handler: GET /designers
pub async fn list_designers_handler(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Response<Body>, Error> {
    match service::list_approved_designers(client, table_name).await {
        Ok(designers) if designers.is_empty() => Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .header("Content-Type", "application/json")
            .header("Access-Control-Allow-Origin", "*")
            .body(
                serde_json::json!({"message": "No designers found", "error": "No designers found"})
                    .to_string()
                    .into(),
            )
            .map_err(Box::new)?),
        Ok(designers) => json_response(
            StatusCode::OK,
            serde_json::json!({"message": "Designers fetched successfully", "designers": designers}),
        ),
        Err(e) => {
            tracing::error!("Failed to list designers: {}", e);
            error_response("Failed to fetch designers", &e)
        }
    }
}

/// HTTP Handler: GET /designers/{id}
pub async fn get_designer_handler(
    client: &DynamoClient,
    table_name: &str,
    designer_id: &str,
) -> Result<Response<Body>, Error> {
    match service::get_designer(client, table_name, designer_id).await {
        Ok(designer) => json_response(
            StatusCode::OK,
            serde_json::json!({"message": "Designer fetched successfully", "designer": designer}),
        ),
        Err(e) => error_response("Failed to fetch designer", &e),
    }
}

/// HTTP Handler: PATCH /designers/{id}/status
pub async fn update_status_handler(
    client: &DynamoClient,
    table_name: &str,
    designer_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: UpdateStatusPayload = match parse_json(body) {
        Ok(p) => p,
        Err(e) => return error_response("Invalid request body", &e),
    };

    match service::set_approval(client, table_name, designer_id, payload.is_approved).await {
        Ok(designer) => json_response(
            StatusCode::OK,
            serde_json::json!({"message": "Designer status updated", "designer": designer}),
        ),
        Err(e) => error_response("Failed to update designer status", &e),
    }
}

/// HTTP Handler: DELETE /designers/{id}
pub async fn delete_designer_handler(
    client: &DynamoClient,
    table_name: &str,
    designer_id: &str,
) -> Result<Response<Body>, Error> {
    match service::delete_designer(client, table_name, designer_id).await {
        Ok(()) => json_response(
            StatusCode::OK,
            serde_json::json!({"message": "Designer deleted successfully", "designer_id": designer_id}),
        ),
        Err(e) => error_response("Failed to delete designer", &e),
    }
}
