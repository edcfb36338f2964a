//! Runtime client errors.

use std::fmt;

use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

/// Maximum number of body bytes kept from an error response.
pub const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Number of body bytes shown in an error message.
const DISPLAY_BODY_BYTES: usize = 512;

/// Errors returned by the client and the generated bindings.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected JSON.
    #[error("failed to decode response JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A required path parameter was empty. Raised before any request is sent.
    #[error("{0} is required")]
    MissingParameter(&'static str),

    /// The base URL or a request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Serialization(String),
}

impl ClientError {
    /// Returns the HTTP status code if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// A non-success API response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: u16,
    /// Canonical reason phrase (`Not Found`), empty for unknown codes.
    pub reason: String,
    /// The first [`MAX_ERROR_BODY_BYTES`] of the response body.
    pub body: Vec<u8>,
    /// The body parsed as a JSON object, when it is one.
    pub parsed_body: Option<Map<String, Value>>,
}

impl ApiError {
    /// Builds an error from a status and the raw body.
    pub fn new(status: StatusCode, mut body: Vec<u8>) -> Self {
        body.truncate(MAX_ERROR_BODY_BYTES);
        let parsed_body = if body.is_empty() {
            None
        } else {
            match serde_json::from_slice::<Value>(&body) {
                Ok(Value::Object(map)) => Some(map),
                _ => None,
            }
        };

        Self {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
            parsed_body,
        }
    }

    /// Reads a bounded amount of the response body and builds the error.
    ///
    /// A body that fails mid-read keeps whatever arrived before the failure.
    pub async fn from_response(mut response: reqwest::Response) -> Self {
        let status = response.status();
        let mut body = Vec::new();
        while body.len() < MAX_ERROR_BODY_BYTES {
            match response.chunk().await {
                Ok(Some(chunk)) => body.extend_from_slice(&chunk),
                Ok(None) | Err(_) => break,
            }
        }
        Self::new(status, body)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error: {} {}", self.status, self.reason)?;
        if self.body.is_empty() {
            return Ok(());
        }

        let shown = &self.body[..self.body.len().min(DISPLAY_BODY_BYTES)];
        write!(f, ": {}", String::from_utf8_lossy(shown))?;
        if self.body.len() > DISPLAY_BODY_BYTES {
            write!(f, "...")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_bodies() {
        let err = ApiError::new(StatusCode::NOT_FOUND, br#"{"error": "missing"}"#.to_vec());
        assert_eq!(err.status, 404);
        assert_eq!(err.reason, "Not Found");
        let parsed = err.parsed_body.as_ref().unwrap();
        assert_eq!(parsed["error"], "missing");
    }

    #[test]
    fn non_object_bodies_are_kept_raw() {
        let err = ApiError::new(StatusCode::BAD_GATEWAY, b"upstream down".to_vec());
        assert!(err.parsed_body.is_none());
        assert_eq!(err.to_string(), "API error: 502 Bad Gateway: upstream down");

        let err = ApiError::new(StatusCode::BAD_REQUEST, b"[1, 2]".to_vec());
        assert!(err.parsed_body.is_none());
    }

    #[test]
    fn empty_body_message() {
        let err = ApiError::new(StatusCode::UNAUTHORIZED, Vec::new());
        assert_eq!(err.to_string(), "API error: 401 Unauthorized");
    }

    #[test]
    fn long_bodies_are_truncated_in_messages() {
        let err = ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, vec![b'x'; 2000]);
        let message = err.to_string();
        assert!(message.ends_with("..."));
        assert_eq!(message.matches('x').count(), 512);
        assert_eq!(err.body.len(), 2000);
    }

    #[test]
    fn stored_body_is_capped() {
        let err = ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, vec![b'y'; MAX_ERROR_BODY_BYTES + 10]);
        assert_eq!(err.body.len(), MAX_ERROR_BODY_BYTES);
    }

    #[test]
    fn missing_parameter_names_the_parameter() {
        let err = ClientError::MissingParameter("controlId");
        assert_eq!(err.to_string(), "controlId is required");
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn api_errors_expose_status() {
        let err: ClientError = ApiError::new(StatusCode::TOO_MANY_REQUESTS, Vec::new()).into();
        assert_eq!(err.status_code(), Some(429));
    }
}
