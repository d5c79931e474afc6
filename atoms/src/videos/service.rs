use aws_sdk_dynamodb::types::{AttributeValue, TransactWriteItem, Update};
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

use super::model::{CreatorRequestPayload, PublishVideoPayload, Video, VideoType};
use crate::error::{store_error, ApiError};
use crate::users;

/// Video collection layout:
/// PK = "VIDEO"
/// SK = "VIDEO#{video_id}"
/// `liked_by` and `product_ids` are string sets (absent means empty),
/// `video_urls` and `comments` are lists.
fn parse_video(video_id: &str, item: &HashMap<String, AttributeValue>) -> Video {
    Video {
        video_id: video_id.to_string(),
        user_id: item
            .get("user_id")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        designer_id: item
            .get("designer_id")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string()),
        product_ids: item
            .get("product_ids")
            .and_then(|v| v.as_ss().ok())
            .cloned()
            .unwrap_or_default(),
        type_of_video: item
            .get("type_of_video")
            .and_then(|v| v.as_s().ok())
            .and_then(|s| VideoType::parse(s))
            .unwrap_or(VideoType::NormalVideo),
        video_urls: item
            .get("video_urls")
            .and_then(|v| v.as_l().ok())
            .map(|l| {
                l.iter()
                    .filter_map(|v| v.as_s().ok())
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default(),
        is_approved: item
            .get("is_approved")
            .and_then(|v| v.as_bool().ok())
            .copied()
            .unwrap_or(false),
        likes: item
            .get("likes")
            .and_then(|v| v.as_n().ok())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0),
        liked_by: item
            .get("liked_by")
            .and_then(|v| v.as_ss().ok())
            .cloned()
            .unwrap_or_default(),
        comments: item
            .get("comments")
            .and_then(|v| v.as_l().ok())
            .map(|l| {
                l.iter()
                    .filter_map(|v| v.as_s().ok())
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default(),
        created_at: item
            .get("created_at")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        updated_at: item
            .get("updated_at")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string()),
    }
}

fn string_list(values: &[String]) -> AttributeValue {
    AttributeValue::L(
        values
            .iter()
            .map(|s| AttributeValue::S(s.clone()))
            .collect(),
    )
}

/// Get a specific video
pub async fn get_video(
    client: &DynamoClient,
    table_name: &str,
    video_id: &str,
) -> Result<Video, ApiError> {
    let result = client
        .get_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("VIDEO".to_string()))
        .key("SK", AttributeValue::S(format!("VIDEO#{}", video_id)))
        .send()
        .await
        .map_err(|e| store_error("get_item", e))?;

    if let Some(item) = result.item() {
        Ok(parse_video(video_id, item))
    } else {
        Err(ApiError::NotFound("Video not found".to_string()))
    }
}

/// Load every video (pure domain logic, no HTTP)
pub async fn load_videos(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Vec<Video>, ApiError> {
    let result = client
        .query()
        .table_name(table_name)
        .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
        .expression_attribute_values(":pk", AttributeValue::S("VIDEO".to_string()))
        .expression_attribute_values(":sk_prefix", AttributeValue::S("VIDEO#".to_string()))
        .send()
        .await
        .map_err(|e| store_error("query", e))?;

    let mut videos = Vec::new();
    for item in result.items() {
        if let Some(sk) = item.get("SK").and_then(|v| v.as_s().ok()) {
            if let Some(video_id) = sk.strip_prefix("VIDEO#") {
                videos.push(parse_video(video_id, item));
            }
        }
    }

    Ok(videos)
}

/// Submit a creator application: an unapproved video entry. A user may
/// hold at most one pending application at a time.
pub async fn submit_creator_request(
    client: &DynamoClient,
    table_name: &str,
    payload: CreatorRequestPayload,
) -> Result<Video, ApiError> {
    users::service::get_user(client, table_name, &payload.user_id).await?;

    let pending = load_videos(client, table_name)
        .await?
        .into_iter()
        .any(|v| v.user_id == payload.user_id && !v.is_approved);
    if pending {
        return Err(ApiError::Conflict(
            "User already has a pending creator request".to_string(),
        ));
    }

    let video_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let type_of_video = payload.type_of_video.unwrap_or(VideoType::NormalVideo);
    let video_urls = payload.video_urls.unwrap_or_default();
    let product_ids = payload.product_ids.unwrap_or_default();

    let mut builder = client
        .put_item()
        .table_name(table_name)
        .item("PK", AttributeValue::S("VIDEO".to_string()))
        .item("SK", AttributeValue::S(format!("VIDEO#{}", video_id)))
        .item("user_id", AttributeValue::S(payload.user_id.clone()))
        .item(
            "type_of_video",
            AttributeValue::S(type_of_video.as_str().to_string()),
        )
        .item("video_urls", string_list(&video_urls))
        .item("comments", AttributeValue::L(vec![]))
        .item("is_approved", AttributeValue::Bool(false))
        .item("likes", AttributeValue::N("0".to_string()))
        .item("created_at", AttributeValue::S(now.clone()));

    if let Some(designer_id) = &payload.designer_id {
        builder = builder.item("designer_id", AttributeValue::S(designer_id.clone()));
    }
    // String sets cannot be empty
    if !product_ids.is_empty() {
        builder = builder.item("product_ids", AttributeValue::Ss(product_ids.clone()));
    }

    builder
        .send()
        .await
        .map_err(|e| store_error("put_item", e))?;

    Ok(Video {
        video_id,
        user_id: payload.user_id,
        designer_id: payload.designer_id,
        product_ids,
        type_of_video,
        video_urls,
        is_approved: false,
        likes: 0,
        liked_by: vec![],
        comments: vec![],
        created_at: now,
        updated_at: None,
    })
}

/// Review a creator application. The video flag and the user's
/// `is_creator` flag move inside a single transaction: both writes
/// commit together or neither does.
pub async fn review_creator_request(
    client: &DynamoClient,
    table_name: &str,
    video_id: &str,
    approve: bool,
) -> Result<Video, ApiError> {
    let video = get_video(client, table_name, video_id).await?;
    let now = chrono::Utc::now().to_rfc3339();

    let video_update = Update::builder()
        .table_name(table_name)
        .key("PK", AttributeValue::S("VIDEO".to_string()))
        .key("SK", AttributeValue::S(format!("VIDEO#{}", video_id)))
        .update_expression("SET is_approved = :approved, updated_at = :now")
        .expression_attribute_values(":approved", AttributeValue::Bool(approve))
        .expression_attribute_values(":now", AttributeValue::S(now))
        .condition_expression("attribute_exists(PK)")
        .build()
        .map_err(|e| ApiError::Unexpected(format!("Failed to build video update: {}", e)))?;

    let mut items = vec![TransactWriteItem::builder().update(video_update).build()];
    if approve {
        items.push(users::service::creator_flag_update(table_name, &video.user_id)?);
    }

    client
        .transact_write_items()
        .set_transact_items(Some(items))
        .send()
        .await
        .map_err(|e| store_error("transact_write_items", e))?;

    get_video(client, table_name, video_id).await
}

/// Flip a video's approval flag; single-entity, no transaction needed
pub async fn toggle_video_approval(
    client: &DynamoClient,
    table_name: &str,
    video_id: &str,
) -> Result<Video, ApiError> {
    let video = get_video(client, table_name, video_id).await?;
    let now = chrono::Utc::now().to_rfc3339();

    client
        .update_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("VIDEO".to_string()))
        .key("SK", AttributeValue::S(format!("VIDEO#{}", video_id)))
        .update_expression("SET is_approved = :approved, updated_at = :now")
        .expression_attribute_values(":approved", AttributeValue::Bool(!video.is_approved))
        .expression_attribute_values(":now", AttributeValue::S(now))
        .send()
        .await
        .map_err(|e| store_error("update_item", e))?;

    get_video(client, table_name, video_id).await
}

/// Which way a like toggle goes for this user
#[derive(Debug, PartialEq, Eq)]
pub enum LikeAction {
    Add,
    Remove,
}

pub fn like_action(liked_by: &[String], user_id: &str) -> LikeAction {
    if liked_by.iter().any(|u| u == user_id) {
        LikeAction::Remove
    } else {
        LikeAction::Add
    }
}

/// Toggle a user's like. The counter and set mutations use the store's
/// atomic ADD/DELETE primitives; the membership decision itself is a
/// read-modify-write.
pub async fn toggle_like(
    client: &DynamoClient,
    table_name: &str,
    video_id: &str,
    user_id: &str,
) -> Result<Video, ApiError> {
    let video = get_video(client, table_name, video_id).await?;

    let (expression, delta) = match like_action(&video.liked_by, user_id) {
        LikeAction::Add => ("ADD likes :delta, liked_by :user", "1"),
        LikeAction::Remove => ("ADD likes :delta DELETE liked_by :user", "-1"),
    };

    client
        .update_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("VIDEO".to_string()))
        .key("SK", AttributeValue::S(format!("VIDEO#{}", video_id)))
        .update_expression(expression)
        .expression_attribute_values(":delta", AttributeValue::N(delta.to_string()))
        .expression_attribute_values(":user", AttributeValue::Ss(vec![user_id.to_string()]))
        .send()
        .await
        .map_err(|e| store_error("update_item", e))?;

    get_video(client, table_name, video_id).await
}

/// Publish a video as a recognized creator: append URLs to an existing
/// approved entry, or create a fresh approved one.
pub async fn create_or_update_video(
    client: &DynamoClient,
    table_name: &str,
    payload: PublishVideoPayload,
) -> Result<Video, ApiError> {
    let user = users::service::get_user(client, table_name, &payload.user_id).await?;
    if !user.is_creator {
        return Err(ApiError::Conflict(
            "User is not an approved creator".to_string(),
        ));
    }
    if payload.video_urls.is_empty() {
        return Err(ApiError::Validation("video_urls is required".to_string()));
    }

    if let Some(video_id) = &payload.video_id {
        let video = get_video(client, table_name, video_id).await?;
        let now = chrono::Utc::now().to_rfc3339();

        client
            .update_item()
            .table_name(table_name)
            .key("PK", AttributeValue::S("VIDEO".to_string()))
            .key("SK", AttributeValue::S(format!("VIDEO#{}", video.video_id)))
            .update_expression(
                "SET video_urls = list_append(video_urls, :urls), updated_at = :now",
            )
            .expression_attribute_values(":urls", string_list(&payload.video_urls))
            .expression_attribute_values(":now", AttributeValue::S(now))
            .send()
            .await
            .map_err(|e| store_error("update_item", e))?;

        return get_video(client, table_name, &video.video_id).await;
    }

    let video_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let type_of_video = payload.type_of_video.unwrap_or(VideoType::NormalVideo);
    let product_ids = payload.product_ids.unwrap_or_default();

    let mut builder = client
        .put_item()
        .table_name(table_name)
        .item("PK", AttributeValue::S("VIDEO".to_string()))
        .item("SK", AttributeValue::S(format!("VIDEO#{}", video_id)))
        .item("user_id", AttributeValue::S(payload.user_id.clone()))
        .item(
            "type_of_video",
            AttributeValue::S(type_of_video.as_str().to_string()),
        )
        .item("video_urls", string_list(&payload.video_urls))
        .item("comments", AttributeValue::L(vec![]))
        .item("is_approved", AttributeValue::Bool(true))
        .item("likes", AttributeValue::N("0".to_string()))
        .item("created_at", AttributeValue::S(now.clone()));

    if let Some(designer_id) = &payload.designer_id {
        builder = builder.item("designer_id", AttributeValue::S(designer_id.clone()));
    }
    if !product_ids.is_empty() {
        builder = builder.item("product_ids", AttributeValue::Ss(product_ids.clone()));
    }

    builder
        .send()
        .await
        .map_err(|e| store_error("put_item", e))?;

    Ok(Video {
        video_id,
        user_id: payload.user_id,
        designer_id: payload.designer_id,
        product_ids,
        type_of_video,
        video_urls: payload.video_urls,
        is_approved: true,
        likes: 0,
        liked_by: vec![],
        comments: vec![],
        created_at: now,
        updated_at: None,
    })
}

/// Append a free-text comment to a video
pub async fn add_comment(
    client: &DynamoClient,
    table_name: &str,
    video_id: &str,
    text: &str,
) -> Result<Video, ApiError> {
    get_video(client, table_name, video_id).await?;

    client
        .update_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("VIDEO".to_string()))
        .key("SK", AttributeValue::S(format!("VIDEO#{}", video_id)))
        .update_expression("SET #comments = list_append(#comments, :comment)")
        .expression_attribute_names("#comments", "comments")
        .expression_attribute_values(
            ":comment",
            AttributeValue::L(vec![AttributeValue::S(text.to_string())]),
        )
        .send()
        .await
        .map_err(|e| store_error("update_item", e))?;

    get_video(client, table_name, video_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_toggles_between_add_and_remove() {
        let mut liked_by: Vec<String> = vec![];
        assert_eq!(like_action(&liked_by, "u1"), LikeAction::Add);

        liked_by.push("u1".to_string());
        assert_eq!(like_action(&liked_by, "u1"), LikeAction::Remove);
        assert_eq!(like_action(&liked_by, "u2"), LikeAction::Add);

        // Toggling twice lands back where it started
        liked_by.retain(|u| u != "u1");
        assert_eq!(like_action(&liked_by, "u1"), LikeAction::Add);
    }

    #[test]
    fn string_list_preserves_order() {
        let urls = vec!["a.mp4".to_string(), "b.mp4".to_string()];
        let attr = string_list(&urls);
        let list = attr.as_l().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].as_s().unwrap(), "a.mp4");
        assert_eq!(list[1].as_s().unwrap(), "b.mp4");
    }
}
