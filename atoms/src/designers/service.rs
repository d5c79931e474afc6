use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

use super::model::Designer;
use crate::error::{store_error, ApiError};

/// Designer collection layout:
/// PK = "DESIGNER"
/// SK = "DESIGNER#{designer_id}"
fn parse_designer(designer_id: &str, item: &HashMap<String, AttributeValue>) -> Designer {
    Designer {
        designer_id: designer_id.to_string(),
        user_id: item
            .get("user_id")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        logo_url: item
            .get("logo_url")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string()),
        background_url: item
            .get("background_url")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string()),
        short_description: item
            .get("short_description")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        about_text: item
            .get("about_text")
            .and_then(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .unwrap_or_default(),
        is_approved: item
            .get("is_approved")
            .and_then(|v| v.as_bool().ok())
            .copied()
            .unwrap_or(false),
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

/// Create a designer profile. Profiles start unapproved and only show
/// up in the public listing after an admin flips the flag.
pub async fn create_designer(
    client: &DynamoClient,
    table_name: &str,
    user_id: &str,
    short_description: &str,
    about_text: &str,
    logo_url: Option<String>,
    background_url: Option<String>,
) -> Result<Designer, ApiError> {
    let designer_id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().to_rfc3339();
    let sk = format!("DESIGNER#{}", designer_id);

    let mut builder = client
        .put_item()
        .table_name(table_name)
        .item("PK", AttributeValue::S("DESIGNER".to_string()))
        .item("SK", AttributeValue::S(sk))
        .item("user_id", AttributeValue::S(user_id.to_string()))
        .item(
            "short_description",
            AttributeValue::S(short_description.to_string()),
        )
        .item("about_text", AttributeValue::S(about_text.to_string()))
        .item("is_approved", AttributeValue::Bool(false))
        .item("created_at", AttributeValue::S(now.clone()));

    if let Some(url) = &logo_url {
        builder = builder.item("logo_url", AttributeValue::S(url.clone()));
    }
    if let Some(url) = &background_url {
        builder = builder.item("background_url", AttributeValue::S(url.clone()));
    }

    builder
        .send()
        .await
        .map_err(|e| store_error("put_item", e))?;

    Ok(Designer {
        designer_id,
        user_id: user_id.to_string(),
        logo_url,
        background_url,
        short_description: short_description.to_string(),
        about_text: about_text.to_string(),
        is_approved: false,
        created_at: now,
        updated_at: None,
    })
}

/// Get a specific designer
pub async fn get_designer(
    client: &DynamoClient,
    table_name: &str,
    designer_id: &str,
) -> Result<Designer, ApiError> {
    let result = client
        .get_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("DESIGNER".to_string()))
        .key("SK", AttributeValue::S(format!("DESIGNER#{}", designer_id)))
        .send()
        .await
        .map_err(|e| store_error("get_item", e))?;

    if let Some(item) = result.item() {
        Ok(parse_designer(designer_id, item))
    } else {
        Err(ApiError::NotFound("Designer not found".to_string()))
    }
}

/// Load every designer profile (pure domain logic, no HTTP)
pub async fn load_designers(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Vec<Designer>, ApiError> {
    let result = client
        .query()
        .table_name(table_name)
        .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
        .expression_attribute_values(":pk", AttributeValue::S("DESIGNER".to_string()))
        .expression_attribute_values(":sk_prefix", AttributeValue::S("DESIGNER#".to_string()))
        .send()
        .await
        .map_err(|e| store_error("query", e))?;

    let mut designers = Vec::new();
    for item in result.items() {
        if let Some(sk) = item.get("SK").and_then(|v| v.as_s().ok()) {
            if let Some(designer_id) = sk.strip_prefix("DESIGNER#") {
                designers.push(parse_designer(designer_id, item));
            }
        }
    }

    Ok(designers)
}

/// List approved designers, newest profile first
pub async fn list_approved_designers(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Vec<Designer>, ApiError> {
    let mut designers: Vec<Designer> = load_designers(client, table_name)
        .await?
        .into_iter()
        .filter(|d| d.is_approved)
        .collect();

    sort_newest_first(&mut designers);
    Ok(designers)
}

/// Sort designers by creation time, newest first
pub fn sort_newest_first(designers: &mut [Designer]) {
    designers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Admin toggle of the approval flag. Independent of any pending update
/// request: this flips visibility, never content.
pub async fn set_approval(
    client: &DynamoClient,
    table_name: &str,
    designer_id: &str,
    is_approved: bool,
) -> Result<Designer, ApiError> {
    // Surface NotFound before writing
    get_designer(client, table_name, designer_id).await?;

    let now = chrono::Utc::now().to_rfc3339();
    client
        .update_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("DESIGNER".to_string()))
        .key("SK", AttributeValue::S(format!("DESIGNER#{}", designer_id)))
        .update_expression("SET is_approved = :approved, updated_at = :now")
        .expression_attribute_values(":approved", AttributeValue::Bool(is_approved))
        .expression_attribute_values(":now", AttributeValue::S(now))
        .send()
        .await
        .map_err(|e| store_error("update_item", e))?;

    get_designer(client, table_name, designer_id).await
}

/// Apply an already-filtered set of content-field updates as one
/// partial write. Callers pass the output of the update-request
/// allow-list filter; this never touches identity or approval fields.
pub async fn apply_content_update(
    client: &DynamoClient,
    table_name: &str,
    designer_id: &str,
    updates: Vec<(String, AttributeValue)>,
) -> Result<(), ApiError> {
    if updates.is_empty() {
        return Ok(());
    }

    let mut update_expr = vec!["updated_at = :now".to_string()];
    let mut expr_names = HashMap::new();
    let mut expr_values = HashMap::new();

    for (i, (field, value)) in updates.into_iter().enumerate() {
        let name = format!("#f{}", i);
        let placeholder = format!(":v{}", i);
        update_expr.push(format!("{} = {}", name, placeholder));
        expr_names.insert(name, field);
        expr_values.insert(placeholder, value);
    }

    let now = chrono::Utc::now().to_rfc3339();
    let mut builder = client
        .update_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("DESIGNER".to_string()))
        .key("SK", AttributeValue::S(format!("DESIGNER#{}", designer_id)))
        .update_expression(format!("SET {}", update_expr.join(", ")))
        // Update, never upsert
        .condition_expression("attribute_exists(PK)")
        .expression_attribute_values(":now", AttributeValue::S(now));

    for (k, v) in expr_names {
        builder = builder.expression_attribute_names(k, v);
    }
    for (k, v) in expr_values {
        builder = builder.expression_attribute_values(k, v);
    }

    builder
        .send()
        .await
        .map_err(|e| store_error("update_item", e))?;

    Ok(())
}

/// Delete a designer profile (explicit admin action only)
pub async fn delete_designer(
    client: &DynamoClient,
    table_name: &str,
    designer_id: &str,
) -> Result<(), ApiError> {
    get_designer(client, table_name, designer_id).await?;

    client
        .delete_item()
        .table_name(table_name)
        .key("PK", AttributeValue::S("DESIGNER".to_string()))
        .key("SK", AttributeValue::S(format!("DESIGNER#{}", designer_id)))
        .send()
        .await
        .map_err(|e| store_error("delete_item", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn designer(id: &str, created_at: &str, approved: bool) -> Designer {
        Designer {
            designer_id: id.to_string(),
            user_id: "u1".to_string(),
            logo_url: None,
            background_url: None,
            short_description: "chairs".to_string(),
            about_text: String::new(),
            is_approved: approved,
            created_at: created_at.to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn listing_sorts_newest_first() {
        let mut designers = vec![
            designer("a", "2024-01-01T00:00:00+00:00", true),
            designer("b", "2024-03-01T00:00:00+00:00", true),
            designer("c", "2024-02-01T00:00:00+00:00", true),
        ];
        sort_newest_first(&mut designers);
        let order: Vec<&str> = designers.iter().map(|d| d.designer_id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }
}
