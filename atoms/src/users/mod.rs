pub mod http;
pub mod model;
pub mod service;

pub use http::*;
pub use model::{CreateUserPayload, User};
pub use service::*;
