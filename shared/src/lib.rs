pub mod app_state;
pub mod s3;
pub mod types;

pub use app_state::AppState;
