use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

use super::model::{FieldValue, RequestStatus, UpdateRequest, MERGEABLE_FIELDS};
use crate::designers;
use crate::error::{store_error, ApiError};

/// Update request layout:
/// PK = "REQUEST"
/// SK = "REQUEST#{request_id}"
/// `requested_updates` is stored verbatim as a JSON string attribute.
fn parse_request(request_id: &str, item: &HashMap<String, AttributeValue>) -> UpdateRequest {
    let requested_updates = item
        .get("requested_updates")
        .and_then(|v| v.as_s().ok())
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default();

    UpdateRequest {
        request_id: request_id.to_string(),
        designer_id: item
            .get("designer_id")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        requested_updates,
        status: item
            .get("status")
            .and_then(|v| v.as_s().ok())
            .and_then(|s| RequestStatus::parse(s))
            .unwrap_or(RequestStatus::Pending),
        admin_comments: item
            .get("admin_comments")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string()),
        created_at: item
            .get("created_at")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
    }
}

/// Submit a change proposal against an existing designer. The updates
/// mapping is stored verbatim; validation against the designer schema
/// happens at review time, not here.
pub async fn submit_update_request(
    client: &DynamoClient,
    table_name: &str,
    designer_id: &str,
    requested_updates: HashMap<String, FieldValue>,
) -> Result<UpdateRequest, ApiError> {
    // Designer must exist before a request is recorded
    designers::service::get_designer(client, table_name, designer_id).await?;

    let request_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let updates_json = serde_json::to_string(&requested_updates)
        .map_err(|e| ApiError::Unexpected(format!("Failed to serialize updates: {}", e)))?;

    client
        .put_item()
        .table_name(table_name)
        .item("PK", AttributeValue::S("REQUEST".to_string()))
        .item("SK", AttributeValue::S(format!("REQUEST#{}", request_id)))
        .item("designer_id", AttributeValue::S(designer_id.to_string()))
        .item("requested_updates", AttributeValue::S(updates_json))
        .item(
            "status",
            AttributeValue::S(RequestStatus::Pending.as_str().to_string()),
        )
        .item("created_at", AttributeValue::S(now.clone()))
        .send()
        .await
        .map_err(|e| store_error("put_item", e))?;

    Ok(UpdateRequest {
        request_id,
        designer_id: designer_id.to_string(),
        requested_updates,
        status: RequestStatus::Pending,
        admin_comments: None,
        created_at: now,
    })
}

/// Get a specific update request
pub async fn get_update_request(
    client: &DynamoClient,
    table_name: &str,
    request_id: &str,
) -> Result<UpdateRequest, ApiError> {
    let result = client
        .get_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("REQUEST".to_string()))
        .key("SK", AttributeValue::S(format!("REQUEST#{}", request_id)))
        .send()
        .await
        .map_err(|e| store_error("get_item", e))?;

    if let Some(item) = result.item() {
        Ok(parse_request(request_id, item))
    } else {
        Err(ApiError::NotFound("Update request not found".to_string()))
    }
}

/// Load all update requests, newest first
pub async fn load_update_requests(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Vec<UpdateRequest>, ApiError> {
    let result = client
        .query()
        .table_name(table_name)
        .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
        .expression_attribute_values(":pk", AttributeValue::S("REQUEST".to_string()))
        .expression_attribute_values(":sk_prefix", AttributeValue::S("REQUEST#".to_string()))
        .send()
        .await
        .map_err(|e| store_error("query", e))?;

    let mut requests = Vec::new();
    for item in result.items() {
        if let Some(sk) = item.get("SK").and_then(|v| v.as_s().ok()) {
            if let Some(request_id) = sk.strip_prefix("REQUEST#") {
                requests.push(parse_request(request_id, item));
            }
        }
    }

    requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(requests)
}

/// A request can only be reviewed while it is still pending
pub fn ensure_pending(status: RequestStatus) -> Result<(), ApiError> {
    if status == RequestStatus::Pending {
        Ok(())
    } else {
        Err(ApiError::Conflict(
            "Update request already reviewed".to_string(),
        ))
    }
}

/// Filter requested updates down to the allow-listed designer content
/// fields, converting each tagged value to its store representation.
/// Identity fields and unknown keys are dropped.
pub fn mergeable_updates(
    requested_updates: &HashMap<String, FieldValue>,
) -> Vec<(String, AttributeValue)> {
    let mut updates: Vec<(String, AttributeValue)> = requested_updates
        .iter()
        .filter(|(field, _)| MERGEABLE_FIELDS.contains(&field.as_str()))
        .map(|(field, value)| {
            let attr = match value {
                FieldValue::Text(s) => AttributeValue::S(s.clone()),
                FieldValue::Number(n) => AttributeValue::N(n.to_string()),
                FieldValue::Flag(b) => AttributeValue::Bool(*b),
                FieldValue::Absent => AttributeValue::Null(true),
            };
            (field.clone(), attr)
        })
        .collect();

    // Deterministic write order for the update expression
    updates.sort_by(|a, b| a.0.cmp(&b.0));
    updates
}

/// Review a pending request. Approval merges the allow-listed fields
/// onto the designer as one partial write (skipped entirely when the
/// filtered set is empty), then the request itself is marked terminal.
/// The designer write and the request write are two separate writes.
pub async fn review_update_request(
    client: &DynamoClient,
    table_name: &str,
    request_id: &str,
    decision: RequestStatus,
    admin_comments: Option<String>,
) -> Result<UpdateRequest, ApiError> {
    let request = get_update_request(client, table_name, request_id).await?;
    ensure_pending(request.status)?;

    if decision == RequestStatus::Approved {
        let updates = mergeable_updates(&request.requested_updates);
        if !updates.is_empty() {
            designers::service::apply_content_update(
                client,
                table_name,
                &request.designer_id,
                updates,
            )
            .await?;
        }
        tracing::info!(
            "Update request {} approved for designer {}",
            request_id,
            request.designer_id
        );
    }

    let comments = admin_comments
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| decision.default_admin_comment().to_string());

    client
        .update_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("REQUEST".to_string()))
        .key("SK", AttributeValue::S(format!("REQUEST#{}", request_id)))
        .update_expression("SET #status = :status, admin_comments = :comments")
        .expression_attribute_names("#status", "status")
        .expression_attribute_values(
            ":status",
            AttributeValue::S(decision.as_str().to_string()),
        )
        .expression_attribute_values(":comments", AttributeValue::S(comments.clone()))
        .send()
        .await
        .map_err(|e| store_error("update_item", e))?;

    Ok(UpdateRequest {
        status: decision,
        admin_comments: Some(comments),
        ..request
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_requests_are_reviewable() {
        assert!(ensure_pending(RequestStatus::Pending).is_ok());
        assert!(matches!(
            ensure_pending(RequestStatus::Approved),
            Err(ApiError::Conflict(_))
        ));
        assert!(matches!(
            ensure_pending(RequestStatus::Rejected),
            Err(ApiError::Conflict(_))
        ));
    }

    #[test]
    fn merge_filter_keeps_allow_listed_fields_only() {
        let mut updates = HashMap::new();
        updates.insert(
            "short_description".to_string(),
            FieldValue::Text("Hand-carved oak".to_string()),
        );
        updates.insert(
            "user_id".to_string(),
            FieldValue::Text("intruder".to_string()),
        );
        updates.insert("likes".to_string(), FieldValue::Number(99.0));
        updates.insert("logo_url".to_string(), FieldValue::Absent);

        let merged = mergeable_updates(&updates);
        let fields: Vec<&str> = merged.iter().map(|(f, _)| f.as_str()).collect();

        assert_eq!(fields, vec!["logo_url", "short_description"]);
        assert_eq!(
            merged[1].1,
            AttributeValue::S("Hand-carved oak".to_string())
        );
        assert_eq!(merged[0].1, AttributeValue::Null(true));
    }

    #[test]
    fn merge_filter_on_foreign_keys_is_empty() {
        let mut updates = HashMap::new();
        updates.insert("user_id".to_string(), FieldValue::Text("x".to_string()));
        updates.insert("is_approved".to_string(), FieldValue::Flag(true));

        assert!(mergeable_updates(&updates).is_empty());
    }
}
