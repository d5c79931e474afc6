use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{http::StatusCode, Body, Error, Response};
use std::collections::HashMap;

use atelier_atoms::designers::model::Designer;
use atelier_atoms::http::{error_response, json_response};
use atelier_atoms::update_requests::model::UpdateRequest;
use atelier_atoms::users::model::User;
use atelier_atoms::{designers, update_requests, users};

use crate::types::UpdateRequestView;

/// Populate requests with their designers and users. Requests with a
/// dangling designer reference still appear, unpopulated.
pub fn join_requests(
    requests: Vec<UpdateRequest>,
    designer_index: &HashMap<String, Designer>,
    user_index: &HashMap<String, User>,
) -> Vec<UpdateRequestView> {
    requests
        .into_iter()
        .map(|request| {
            let designer = designer_index.get(&request.designer_id).cloned();
            let user = designer
                .as_ref()
                .and_then(|d| user_index.get(&d.user_id))
                .cloned();
            UpdateRequestView {
                request,
                designer,
                user,
            }
        })
        .collect()
}

/// List all update requests newest first, each with its nested
/// designer -> user population (Backend Join)
pub async fn latest_update_requests(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Response<Body>, Error> {
    // 1. Fetch requests and designers in parallel
    let (requests_result, designers_result) = tokio::join!(
        update_requests::service::load_update_requests(client, table_name),
        designers::service::load_designers(client, table_name)
    );

    let requests = match requests_result {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to load update requests: {}", e);
            return error_response("Failed to fetch update requests", &e);
        }
    };
    let designers = match designers_result {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("Failed to load designers: {}", e);
            return error_response("Failed to fetch update requests", &e);
        }
    };

    // 2. Index designers by id
    let designer_index: HashMap<String, Designer> = designers
        .into_iter()
        .map(|d| (d.designer_id.clone(), d))
        .collect();

    // 3. Fetch the user behind each referenced designer
    let mut user_index: HashMap<String, User> = HashMap::new();
    for request in &requests {
        if let Some(designer) = designer_index.get(&request.designer_id) {
            if !user_index.contains_key(&designer.user_id) {
                match users::service::get_user(client, table_name, &designer.user_id).await {
                    Ok(user) => {
                        user_index.insert(designer.user_id.clone(), user);
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to load user {} for designer {}: {}",
                            designer.user_id,
                            designer.designer_id,
                            e
                        );
                    }
                }
            }
        }
    }

    // 4. Attach and return (requests are already newest first)
    let views = join_requests(requests, &designer_index, &user_index);

    json_response(
        StatusCode::OK,
        serde_json::json!({"message": "Update requests fetched successfully", "update_requests": views}),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_atoms::update_requests::model::RequestStatus;

    fn request(id: &str, designer_id: &str) -> UpdateRequest {
        UpdateRequest {
            request_id: id.to_string(),
            designer_id: designer_id.to_string(),
            requested_updates: HashMap::new(),
            status: RequestStatus::Pending,
            admin_comments: None,
            created_at: "2024-05-01T00:00:00+00:00".to_string(),
        }
    }

    fn designer(id: &str, user_id: &str) -> Designer {
        Designer {
            designer_id: id.to_string(),
            user_id: user_id.to_string(),
            logo_url: None,
            background_url: None,
            short_description: String::new(),
            about_text: String::new(),
            is_approved: true,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: None,
        }
    }

    fn user(id: &str) -> User {
        User {
            user_id: id.to_string(),
            user_name: "Mira".to_string(),
            user_email: "mira@example.com".to_string(),
            is_creator: false,
            user_created_at: "2023-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn join_populates_designer_and_user() {
        let designer_index =
            HashMap::from([("d1".to_string(), designer("d1", "u1"))]);
        let user_index = HashMap::from([("u1".to_string(), user("u1"))]);

        let views = join_requests(vec![request("r1", "d1")], &designer_index, &user_index);

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].designer.as_ref().unwrap().designer_id, "d1");
        assert_eq!(views[0].user.as_ref().unwrap().user_id, "u1");
    }

    #[test]
    fn dangling_references_stay_unpopulated() {
        let views = join_requests(
            vec![request("r1", "ghost")],
            &HashMap::new(),
            &HashMap::new(),
        );

        assert_eq!(views.len(), 1);
        assert!(views[0].designer.is_none());
        assert!(views[0].user.is_none());
    }
}
