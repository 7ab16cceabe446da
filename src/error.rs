use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidId(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    Conflict(&'static str),

    #[error("{0}")]
    BadRequest(String),

    /// The message is what the caller sees; the source is only logged.
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(message: &'static str, source: anyhow::Error) -> Self {
        ApiError::Internal { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidId(_)
            | ApiError::Validation(_)
            | ApiError::Conflict(_)
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal { message, source } = &self {
            tracing::error!("{}: {:#}", message, source);
        }
        let status = self.status();
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

/// Parses a path segment as a record id: an optional `+` or `-` sign
/// followed by ASCII digits, nothing else. `+5` and `-1` are accepted.
/// A well-formed number too large for `i64` saturates, so it simply matches
/// no record and the lookup reports not found.
pub fn parse_id(raw: &str, invalid: &'static str) -> Result<i64, ApiError> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidId(invalid));
    }
    Ok(raw.parse::<i64>().unwrap_or(if raw.starts_with('-') { i64::MIN } else { i64::MAX }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(ApiError::InvalidId("Invalid animal ID").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("Animal not found").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict("Email already in use").status(), StatusCode::BAD_REQUEST);
        let internal = ApiError::internal("Failed to fetch animals", anyhow::anyhow!("lock poisoned"));
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_message_hides_source() {
        let err = ApiError::internal("Failed to register user", anyhow::anyhow!("users table lock poisoned"));
        assert_eq!(err.to_string(), "Failed to register user");
    }

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("42", "bad").unwrap(), 42);
        assert!(parse_id("abc", "bad").is_err());
        assert!(parse_id("4.5", "bad").is_err());
        assert!(parse_id("", "bad").is_err());
        assert!(parse_id("+", "bad").is_err());
        assert!(parse_id(" 5", "bad").is_err());
    }

    #[test]
    fn signed_and_oversized_ids_are_well_formed() {
        assert_eq!(parse_id("+5", "bad").unwrap(), 5);
        assert_eq!(parse_id("-1", "bad").unwrap(), -1);
        assert_eq!(parse_id("99999999999", "bad").unwrap(), 99_999_999_999);
        assert_eq!(parse_id("123456789012345678901234567890", "bad").unwrap(), i64::MAX);
    }
}
