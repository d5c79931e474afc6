use serde::{Deserialize, Serialize};

/// Content tag on a video entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoType {
    NormalVideo,
    ProductVideo,
}

impl VideoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::NormalVideo => "normal_video",
            VideoType::ProductVideo => "product_video",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal_video" => Some(VideoType::NormalVideo),
            "product_video" => Some(VideoType::ProductVideo),
            _ => None,
        }
    }
}

/// Video domain model. A video with `is_approved = false` and no
/// decided review doubles as the owner's pending creator application.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Video {
    pub video_id: String,
    pub user_id: String,
    pub designer_id: Option<String>,
    pub product_ids: Vec<String>,
    pub type_of_video: VideoType,
    pub video_urls: Vec<String>,
    pub is_approved: bool,
    pub likes: i64,
    pub liked_by: Vec<String>,
    pub comments: Vec<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatorRequestPayload {
    pub user_id: String,
    pub designer_id: Option<String>,
    pub type_of_video: Option<VideoType>,
    pub video_urls: Option<Vec<String>>,
    pub product_ids: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewVideoPayload {
    pub approve: bool,
}

#[derive(Debug, Deserialize)]
pub struct PublishVideoPayload {
    pub user_id: String,
    /// Present when appending URLs to an existing approved entry
    pub video_id: Option<String>,
    pub designer_id: Option<String>,
    pub type_of_video: Option<VideoType>,
    pub video_urls: Vec<String>,
    pub product_ids: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct LikePayload {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentPayload {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_type_round_trips() {
        assert_eq!(VideoType::parse("normal_video"), Some(VideoType::NormalVideo));
        assert_eq!(VideoType::parse("product_video"), Some(VideoType::ProductVideo));
        assert_eq!(VideoType::parse("short"), None);
        assert_eq!(VideoType::ProductVideo.as_str(), "product_video");
    }

    #[test]
    fn video_type_serde_uses_snake_case() {
        let json = serde_json::to_string(&VideoType::ProductVideo).unwrap();
        assert_eq!(json, r#""product_video""#);
        let parsed: VideoType = serde_json::from_str(r#""normal_video""#).unwrap();
        assert_eq!(parsed, VideoType::NormalVideo);
    }
}
