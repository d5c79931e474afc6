pub mod http;
pub mod model;
pub mod service;

pub use http::*;
pub use model::{
    CommentPayload, CreatorRequestPayload, LikePayload, PublishVideoPayload, ReviewVideoPayload,
    Video, VideoType,
};
pub use service::*;
