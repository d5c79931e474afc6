use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Error, Response};

use super::model::{
    CommentPayload, CreatorRequestPayload, LikePayload, PublishVideoPayload, ReviewVideoPayload,
};
use super::service;
use crate::http::{error_response, json_response, parse_json};

/// HTTP Handler: POST /videos/creator-request
pub async fn submit_creator_request_handler(
    client: &DynamoClient,
    table_name: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: CreatorRequestPayload = match parse_json(body) {
        Ok(p) => p,
        Err(e) => return error_response("Invalid request body", &e),
    };

    match service::submit_creator_request(client, table_name, payload).await {
        Ok(video) => json_response(
            StatusCode::CREATED,
            serde_json::json!({"message": "Creator request submitted", "video": video}),
        ),
        Err(e) => error_response("Failed to submit creator request", &e),
    }
}

/// HTTP Handler: PUT /videos/{id}/review
pub async fn review_creator_request_handler(
    client: &DynamoClient,
    table_name: &str,
    video_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: ReviewVideoPayload = match parse_json(body) {
        Ok(p) => p,
        Err(e) => return error_response("Invalid request body", &e),
    };

    match service::review_creator_request(client, table_name, video_id, payload.approve).await {
        Ok(video) => json_response(
            StatusCode::OK,
            serde_json::json!({"message": "Creator request reviewed", "video": video}),
        ),
        Err(e) => error_response("Failed to review creator request", &e),
    }
}

/// HTTP Handler: PATCH /videos/{id}/approval
pub async fn toggle_approval_handler(
    client: &DynamoClient,
    table_name: &str,
    video_id: &str,
) -> Result<Response<Body>, Error> {
    match service::toggle_video_approval(client, table_name, video_id).await {
        Ok(video) => json_response(
            StatusCode::OK,
            serde_json::json!({"message": "Video approval toggled", "video": video}),
        ),
        Err(e) => error_response("Failed to toggle video approval", &e),
    }
}

/// HTTP Handler: POST /videos/{id}/like
pub async fn toggle_like_handler(
    client: &DynamoClient,
    table_name: &str,
    video_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: LikePayload = match parse_json(body) {
        Ok(p) => p,
        Err(e) => return error_response("Invalid request body", &e),
    };

    match service::toggle_like(client, table_name, video_id, &payload.user_id).await {
        Ok(video) => json_response(
            StatusCode::OK,
            serde_json::json!({"message": "Like toggled", "video": video}),
        ),
        Err(e) => error_response("Failed to toggle like", &e),
    }
}

/// HTTP Handler: POST /videos
pub async fn publish_video_handler(
    client: &DynamoClient,
    table_name: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: PublishVideoPayload = match parse_json(body) {
        Ok(p) => p,
        Err(e) => return error_response("Invalid request body", &e),
    };

    let created = payload.video_id.is_none();
    match service::create_or_update_video(client, table_name, payload).await {
        Ok(video) if created => json_response(
            StatusCode::CREATED,
            serde_json::json!({"message": "Video published", "video": video}),
        ),
        Ok(video) => json_response(
            StatusCode::OK,
            serde_json::json!({"message": "Video updated", "video": video}),
        ),
        Err(e) => error_response("Failed to publish video", &e),
    }
}

/// HTTP Handler: POST /videos/{id}/comments
pub async fn add_comment_handler(
    client: &DynamoClient,
    table_name: &str,
    video_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: CommentPayload = match parse_json(body) {
        Ok(p) => p,
        Err(e) => return error_response("Invalid request body", &e),
    };
    if payload.text.trim().is_empty() {
        return error_response(
            "Invalid request body",
            &crate::ApiError::Validation("text is required".to_string()),
        );
    }

    match service::add_comment(client, table_name, video_id, &payload.text).await {
        Ok(video) => json_response(
            StatusCode::OK,
            serde_json::json!({"message": "Comment added", "video": video}),
        ),
        Err(e) => error_response("Failed to add comment", &e),
    }
}
