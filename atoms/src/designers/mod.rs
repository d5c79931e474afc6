pub mod http;
pub mod model;
pub mod service;

pub use http::*;
pub use model::{CreateDesignerPayload, Designer, InlineImage, UpdateStatusPayload};
pub use service::*;
