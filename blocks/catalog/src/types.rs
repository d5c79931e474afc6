use serde::Serialize;

use atelier_atoms::designers::model::Designer;
use atelier_atoms::products::model::Product;
use atelier_atoms::update_requests::model::UpdateRequest;
use atelier_atoms::users::model::User;
use atelier_atoms::videos::model::Video;

/// Update request populated with its designer and that designer's user
#[derive(Debug, Serialize, Clone)]
pub struct UpdateRequestView {
    pub request: UpdateRequest,
    pub designer: Option<Designer>,
    pub user: Option<User>,
}

/// Approved video populated with its tagged products and owning designer
#[derive(Debug, Serialize, Clone)]
pub struct VideoFeedItem {
    pub video: Video,
    pub designer: Option<Designer>,
    pub products: Vec<Product>,
}
