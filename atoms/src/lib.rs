pub mod designers;
pub mod error;
pub mod http;
pub mod products;
pub mod update_requests;
pub mod users;
pub mod videos;

pub use error::ApiError;
