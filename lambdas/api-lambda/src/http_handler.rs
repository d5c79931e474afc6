use atelier_atoms::designers::model::{CreateDesignerPayload, InlineImage};
use atelier_atoms::http::{error_response, parse_json};
use atelier_atoms::{designers, products, update_requests, users, videos, ApiError};
use atelier_shared::{s3, AppState};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use catalog_block::{feed, requests};
use lambda_http::{
    http::header::HeaderValue,
    http::{Method, StatusCode},
    Body, Error, Request, Response,
};
use std::env;
use std::sync::Arc;

const ALLOWED_ORIGINS: [&str; 2] = ["https://atelier.market", "http://localhost:5173"];

fn get_cors_origin(request_origin: Option<&str>) -> String {
    match request_origin {
        Some(origin) if ALLOWED_ORIGINS.contains(&origin) => origin.to_string(),
        _ => ALLOWED_ORIGINS[0].to_string(),
    }
}

fn with_cors_headers(mut resp: Response<Body>, request_origin: Option<&str>) -> Response<Body> {
    let cors_origin = get_cors_origin(request_origin);

    let headers = resp.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_str(&cors_origin)
            .unwrap_or_else(|_| HeaderValue::from_static("https://atelier.market")),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET,POST,PUT,PATCH,DELETE,OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type,Authorization,X-User-Id"),
    );

    resp
}

fn finalize_response(
    resp: Result<Response<Body>, Error>,
    request_origin: Option<&str>,
) -> Result<Response<Body>, Error> {
    resp.map(|r| with_cors_headers(r, request_origin))
}

/// Main Lambda handler - routes requests to designer, user, video and
/// product endpoints
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = event.body();
    let request_origin = event.headers().get("Origin").and_then(|v| v.to_str().ok());
    tracing::info!(
        "🚀 API Lambda invoked - Method: {} Path: {}",
        method,
        path
    );

    // Handle CORS preflight
    if method == "OPTIONS" {
        let resp = Response::builder()
            .status(StatusCode::OK)
            .body(Body::Empty)
            .map_err(Box::new)?;
        return Ok(with_cors_headers(resp, request_origin));
    }

    let table_name = env::var("TABLE_NAME").unwrap_or_else(|_| "atelier".to_string());

    // Designer routes (profiles + update-request workflow)
    if path.starts_with("/designers") {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let resp = match (method, parts.as_slice()) {
            // POST /designers - create profile (optional inline images)
            (&Method::POST, ["designers"]) => {
                create_designer(&state, &table_name, body).await
            }
            // GET /designers - list approved profiles
            (&Method::GET, ["designers"]) => {
                designers::list_designers_handler(&state.dynamo_client, &table_name).await
            }
            // GET /designers/update-requests/latest - populated listing
            (&Method::GET, ["designers", "update-requests", "latest"]) => {
                requests::latest_update_requests(&state.dynamo_client, &table_name).await
            }
            // PUT /designers/review/{rid} - review update request
            (&Method::PUT, ["designers", "review", request_id]) => {
                update_requests::review_update_request_handler(
                    &state.dynamo_client,
                    &table_name,
                    request_id,
                    body,
                )
                .await
            }
            // GET /designers/{id} - get profile
            (&Method::GET, ["designers", designer_id]) => {
                designers::get_designer_handler(&state.dynamo_client, &table_name, designer_id)
                    .await
            }
            // PATCH /designers/{id}/status - admin approval flag
            (&Method::PATCH, ["designers", designer_id, "status"]) => {
                designers::update_status_handler(
                    &state.dynamo_client,
                    &table_name,
                    designer_id,
                    body,
                )
                .await
            }
            // DELETE /designers/{id} - admin delete
            (&Method::DELETE, ["designers", designer_id]) => {
                designers::delete_designer_handler(&state.dynamo_client, &table_name, designer_id)
                    .await
            }
            // POST /designers/{id}/update-request - submit change proposal
            (&Method::POST, ["designers", designer_id, "update-request"]) => {
                update_requests::submit_update_request_handler(
                    &state.dynamo_client,
                    &table_name,
                    designer_id,
                    body,
                )
                .await
            }
            _ => not_found(),
        };

        return finalize_response(resp, request_origin);
    }

    // User routes
    if path.starts_with("/users") {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let resp = match (method, parts.as_slice()) {
            (&Method::POST, ["users"]) => {
                users::create_user_handler(&state.dynamo_client, &table_name, body).await
            }
            (&Method::GET, ["users", user_id]) => {
                users::get_user_handler(&state.dynamo_client, &table_name, user_id).await
            }
            _ => not_found(),
        };

        return finalize_response(resp, request_origin);
    }

    // Video routes (creator workflow, moderation, likes, feed)
    if path.starts_with("/videos") {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let resp = match (method, parts.as_slice()) {
            // POST /videos/creator-request - pending creator application
            (&Method::POST, ["videos", "creator-request"]) => {
                videos::submit_creator_request_handler(&state.dynamo_client, &table_name, body)
                    .await
            }
            // PUT /videos/{id}/review - transactional creator review
            (&Method::PUT, ["videos", video_id, "review"]) => {
                videos::review_creator_request_handler(
                    &state.dynamo_client,
                    &table_name,
                    video_id,
                    body,
                )
                .await
            }
            // PATCH /videos/{id}/approval - admin toggle
            (&Method::PATCH, ["videos", video_id, "approval"]) => {
                videos::toggle_approval_handler(&state.dynamo_client, &table_name, video_id).await
            }
            // POST /videos/{id}/like - toggle like
            (&Method::POST, ["videos", video_id, "like"]) => {
                videos::toggle_like_handler(&state.dynamo_client, &table_name, video_id, body)
                    .await
            }
            // POST /videos/{id}/comments - append comment
            (&Method::POST, ["videos", video_id, "comments"]) => {
                videos::add_comment_handler(&state.dynamo_client, &table_name, video_id, body)
                    .await
            }
            // POST /videos - publish or extend (creators only)
            (&Method::POST, ["videos"]) => {
                videos::publish_video_handler(&state.dynamo_client, &table_name, body).await
            }
            // GET /videos - populated feed
            (&Method::GET, ["videos"]) => {
                feed::video_feed(&state.dynamo_client, &table_name).await
            }
            _ => not_found(),
        };

        return finalize_response(resp, request_origin);
    }

    // Product routes
    if path.starts_with("/products") {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let resp = match (method, parts.as_slice()) {
            (&Method::POST, ["products"]) => {
                products::create_product_handler(&state.dynamo_client, &table_name, body).await
            }
            (&Method::GET, ["products", product_id]) => {
                products::get_product_handler(&state.dynamo_client, &table_name, product_id).await
            }
            _ => not_found(),
        };

        return finalize_response(resp, request_origin);
    }

    // No matching route
    tracing::warn!("⚠️ No route matched - Method: {} Path: {}", method, path);
    finalize_response(not_found(), request_origin)
}

/// POST /designers - decode inline images, push them through the upload
/// gateway, then hand durable URLs to the designer handler
async fn create_designer(
    state: &AppState,
    table_name: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    let payload: CreateDesignerPayload = match parse_json(body) {
        Ok(p) => p,
        Err(e) => return error_response("Invalid request body", &e),
    };
    if payload.user_id.trim().is_empty() {
        return error_response(
            "Invalid request body",
            &ApiError::Validation("user_id is required".to_string()),
        );
    }
    if payload.short_description.trim().is_empty() {
        return error_response(
            "Invalid request body",
            &ApiError::Validation("short_description is required".to_string()),
        );
    }

    let bucket_name = env::var("S3_BUCKET_NAME").unwrap_or_else(|_| "atelier-app".to_string());

    let logo_url = match upload_inline_image(
        state,
        &bucket_name,
        payload.logo_image.as_ref(),
        "designers/logos",
    )
    .await
    {
        Ok(url) => url,
        Err(e) => return error_response("Failed to upload designer media", &e),
    };
    let background_url = match upload_inline_image(
        state,
        &bucket_name,
        payload.background_image.as_ref(),
        "designers/backgrounds",
    )
    .await
    {
        Ok(url) => url,
        Err(e) => return error_response("Failed to upload designer media", &e),
    };

    designers::create_designer_handler(
        &state.dynamo_client,
        table_name,
        &payload.user_id,
        &payload.short_description,
        payload.about_text.as_deref().unwrap_or(""),
        logo_url,
        background_url,
    )
    .await
}

/// Decode a base64 image (tolerating a data-URI prefix) and upload it
async fn upload_inline_image(
    state: &AppState,
    bucket_name: &str,
    image: Option<&InlineImage>,
    folder: &str,
) -> Result<Option<String>, ApiError> {
    let Some(image) = image else {
        return Ok(None);
    };

    let data = image.data.rsplit(',').next().unwrap_or(&image.data);
    let bytes = STANDARD
        .decode(data)
        .map_err(|e| ApiError::Validation(format!("Invalid base64 image data: {}", e)))?;

    let url = s3::upload(
        &state.s3_client,
        bucket_name,
        bytes,
        &image.content_type,
        folder,
    )
    .await?;

    Ok(Some(url))
}

fn not_found() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(
            serde_json::json!({"message": "Not found", "error": "Not found"})
                .to_string()
                .into(),
        )
        .map_err(Box::new)?)
}
