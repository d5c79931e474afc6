use serde::{Deserialize, Serialize};

/// Designer domain model - a marketplace seller profile
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Designer {
    pub designer_id: String,
    pub user_id: String,
    pub logo_url: Option<String>,
    pub background_url: Option<String>,
    pub short_description: String,
    pub about_text: String,
    pub is_approved: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Inline image attached to a create payload: raw base64 plus its MIME
/// type. Decoded and pushed through the upload gateway at the HTTP
/// boundary, never stored.
#[derive(Debug, Deserialize)]
pub struct InlineImage {
    pub data: String,
    pub content_type: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateDesignerPayload {
    pub user_id: String,
    pub short_description: String,
    pub about_text: Option<String>,
    pub logo_image: Option<InlineImage>,
    pub background_image: Option<InlineImage>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusPayload {
    pub is_approved: bool,
}
