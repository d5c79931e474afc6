// ========== USER ==========
pub use atelier_atoms::users::model::{CreateUserPayload, User};

// ========== DESIGNER ==========
pub use atelier_atoms::designers::model::{
    CreateDesignerPayload, Designer, InlineImage, UpdateStatusPayload,
};

// ========== UPDATE REQUEST ==========
pub use atelier_atoms::update_requests::model::{
    FieldValue, RequestStatus, ReviewUpdateRequestPayload, SubmitUpdateRequestPayload,
    UpdateRequest,
};

// ========== VIDEO ==========
pub use atelier_atoms::videos::model::{
    CommentPayload, CreatorRequestPayload, LikePayload, PublishVideoPayload, ReviewVideoPayload,
    Video, VideoType,
};

// ========== PRODUCT ==========
pub use atelier_atoms::products::model::{CreateProductPayload, Product};
