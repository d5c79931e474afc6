use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::{parse_decision, ReviewUpdateRequestPayload, SubmitUpdateRequestPayload};
use super::service;
use crate::http::{error_response, json_response, parse_json};

/// HTTP Handler: POST /designers/{id}/update-request
pub async fn submit_update_request_handler(
    client: &DynamoClient,
    table_name: &str,
    designer_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: SubmitUpdateRequestPayload = match parse_json(body) {
        Ok(p) => p,
        Err(e) => return error_response("Invalid request body", &e),
    };

    match service::submit_update_request(client, table_name, designer_id, payload.requested_updates)
        .await
    {
        Ok(request) => json_response(
            StatusCode::CREATED,
            serde_json::json!({"message": "Update request submitted", "update_request": request}),
        ),
        Err(e) => error_response("Failed to submit update request", &e),
    }
}

/// HTTP Handler: PUT /designers/review/{requestId}
pub async fn review_update_request_handler(
    client: &DynamoClient,
    table_name: &str,
    request_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: ReviewUpdateRequestPayload = match parse_json(body) {
        Ok(p) => p,
        Err(e) => return error_response("Invalid request body", &e),
    };

    let decision = match parse_decision(&payload.decision) {
        Ok(d) => d,
        Err(e) => return error_response("Invalid review decision", &e),
    };

    match service::review_update_request(
        client,
        table_name,
        request_id,
        decision,
        payload.admin_comments,
    )
    .await
    {
        Ok(request) => json_response(
            StatusCode::OK,
            serde_json::json!({"message": "Update request reviewed", "update_request": request}),
        ),
        Err(e) => error_response("Failed to review update request", &e),
    }
}
