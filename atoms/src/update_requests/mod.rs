pub mod http;
pub mod model;
pub mod service;

pub use http::*;
pub use model::{
    FieldValue, RequestStatus, ReviewUpdateRequestPayload, SubmitUpdateRequestPayload,
    UpdateRequest, MERGEABLE_FIELDS,
};
pub use service::*;
