use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Build a JSON success response: `{ "message": ..., <entity-key>: ... }`
pub fn json_response(status: StatusCode, body: serde_json::Value) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(body.to_string().into())
        .map_err(Box::new)?)
}

/// Build a JSON failure response: `{ "message": ..., "error": ... }`
pub fn error_response(message: &str, err: &ApiError) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(err.status_code())
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(
            serde_json::json!({"message": message, "error": err.to_string()})
                .to_string()
                .into(),
        )
        .map_err(Box::new)?)
}

/// Parse a JSON request body, mapping malformed input to a 400
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::Validation(format!("Invalid JSON payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        name: String,
    }

    #[test]
    fn parse_json_rejects_malformed_bodies() {
        let err = parse_json::<Probe>(b"{not json").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn parse_json_accepts_valid_bodies() {
        let probe: Probe = parse_json(br#"{"name": "mira"}"#).unwrap();
        assert_eq!(probe.name, "mira");
    }

    #[test]
    fn error_response_carries_message_and_error() {
        let resp = error_response(
            "Failed to fetch designer",
            &ApiError::NotFound("Designer not found".into()),
        )
        .unwrap();
        assert_eq!(resp.status(), 404);
        let body = match resp.body() {
            Body::Text(t) => t.clone(),
            _ => panic!("expected text body"),
        };
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["message"], "Failed to fetch designer");
        assert_eq!(parsed["error"], "Designer not found");
    }
}
