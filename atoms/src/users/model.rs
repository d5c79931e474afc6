use serde::{Deserialize, Serialize};

/// Marketplace user. Only the fields the workflow consumes are modeled;
/// `is_creator` is flipped as a side effect of video-creator approval.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub is_creator: bool,
    pub user_created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserPayload {
    pub user_name: String,
    pub user_email: String,
}
