use aws_sdk_dynamodb::types::{AttributeValue, TransactWriteItem, Update};
use aws_sdk_dynamodb::Client as DynamoClient;

use super::model::{CreateUserPayload, User};
use crate::error::{store_error, ApiError};

/// Create a user record
/// PK = SK = "USER#{user_id}"
pub async fn create_user(
    client: &DynamoClient,
    table_name: &str,
    payload: CreateUserPayload,
) -> Result<User, ApiError> {
    let user_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let pk = format!("USER#{}", user_id);

    client
        .put_item()
        .table_name(table_name)
        .item("PK", AttributeValue::S(pk.clone()))
        .item("SK", AttributeValue::S(pk))
        .item("user_name", AttributeValue::S(payload.user_name.clone()))
        .item("user_email", AttributeValue::S(payload.user_email.clone()))
        .item("is_creator", AttributeValue::Bool(false))
        .item("user_created_at", AttributeValue::S(now.clone()))
        .send()
        .await
        .map_err(|e| store_error("put_item", e))?;

    Ok(User {
        user_id,
        user_name: payload.user_name,
        user_email: payload.user_email,
        is_creator: false,
        user_created_at: now,
    })
}

/// Fetch a user by id
pub async fn get_user(
    client: &DynamoClient,
    table_name: &str,
    user_id: &str,
) -> Result<User, ApiError> {
    let pk = format!("USER#{}", user_id);

    let result = client
        .get_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S(pk.clone()))
        .key("SK", AttributeValue::S(pk))
        .send()
        .await
        .map_err(|e| store_error("get_item", e))?;

    if let Some(item) = result.item() {
        Ok(User {
            user_id: user_id.to_string(),
            user_name: item
                .get("user_name")
                .and_then(|v| v.as_s().ok())
                .map(|s| s.to_string())
                .unwrap_or_default(),
            user_email: item
                .get("user_email")
                .and_then(|v| v.as_s().ok())
                .map(|s| s.to_string())
                .unwrap_or_default(),
            is_creator: item
                .get("is_creator")
                .and_then(|v| v.as_bool().ok())
                .copied()
                .unwrap_or(false),
            user_created_at: item
                .get("user_created_at")
                .and_then(|v| v.as_s().ok())
                .map(|s| s.to_string())
                .unwrap_or_default(),
        })
    } else {
        Err(ApiError::NotFound("User not found".to_string()))
    }
}

/// Transact item flipping `is_creator` to true. Joined with the video
/// approval update inside one transact_write_items call so a user is
/// never marked creator without the matching approved video.
pub fn creator_flag_update(table_name: &str, user_id: &str) -> Result<TransactWriteItem, ApiError> {
    let pk = format!("USER#{}", user_id);

    let update = Update::builder()
        .table_name(table_name)
        .key("PK", AttributeValue::S(pk.clone()))
        .key("SK", AttributeValue::S(pk))
        .update_expression("SET is_creator = :creator")
        .expression_attribute_values(":creator", AttributeValue::Bool(true))
        .condition_expression("attribute_exists(PK)")
        .build()
        .map_err(|e| ApiError::Unexpected(format!("Failed to build user update: {}", e)))?;

    Ok(TransactWriteItem::builder().update(update).build())
}
