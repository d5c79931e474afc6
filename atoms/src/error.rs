use thiserror::Error;

/// Workflow and store errors for the marketplace backend
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// HTTP status the adapter maps this error to. State conflicts are
    /// surfaced as 400 rather than 409.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) | ApiError::Validation(_) => 400,
            ApiError::Upload(_) | ApiError::Unexpected(_) => 500,
        }
    }
}

/// Wrap a DynamoDB SDK failure, keeping the operation name in the message
pub fn store_error(operation: &str, err: impl std::fmt::Display) -> ApiError {
    ApiError::Unexpected(format!("DynamoDB {} error: {}", operation, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(ApiError::NotFound("x".into()).status_code(), 404);
        assert_eq!(ApiError::Conflict("x".into()).status_code(), 400);
        assert_eq!(ApiError::Validation("x".into()).status_code(), 400);
        assert_eq!(ApiError::Upload("x".into()).status_code(), 500);
        assert_eq!(ApiError::Unexpected("x".into()).status_code(), 500);
    }

    #[test]
    fn store_error_keeps_operation_name() {
        let err = store_error("get_item", "timed out");
        assert_eq!(err.to_string(), "DynamoDB get_item error: timed out");
    }
}
