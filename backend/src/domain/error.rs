//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and serialises them as the API error envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication failed.
    Unauthorized,
    /// The request conflicts with existing state, such as a taken username.
    Conflict,
    /// An upstream device or service could not be reached or misbehaved.
    BadGateway,
    /// A required backing service is temporarily unavailable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload.
///
/// Serialises as the API error envelope `{success: false, code, message}`,
/// with optional structured `details`.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    details: Option<Value>,
}

/// Validation errors emitted by the fallible constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidationError {
    EmptyMessage,
}

impl std::fmt::Display for ErrorValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
        }
    }
}

impl std::error::Error for ErrorValidationError {}

impl Error {
    /// Create a new error, panicking if validation fails.
    ///
    /// Intended for call sites with literal messages; use [`Error::try_new`]
    /// when the message comes from runtime data.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            details: None,
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary error details, if any.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::BadGateway`].
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadGateway, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

/// Wire representation carrying the constant `success: false` marker the
/// clients key on.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
struct ErrorDto {
    success: bool,
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            success: false,
            code: value.code,
            message: value.message,
            details: value.details,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            success: _,
            code,
            message,
            details,
        } = value;

        let mut error = Error::try_new(code, message)?;
        error.details = details;
        Ok(error)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ErrorCode::InvalidRequest, "invalid_request")]
    #[case(ErrorCode::Unauthorized, "unauthorized")]
    #[case(ErrorCode::Conflict, "conflict")]
    #[case(ErrorCode::BadGateway, "bad_gateway")]
    #[case(ErrorCode::ServiceUnavailable, "service_unavailable")]
    #[case(ErrorCode::InternalError, "internal_error")]
    fn codes_serialise_snake_case(#[case] code: ErrorCode, #[case] expected: &str) {
        let value = serde_json::to_value(code).expect("code serialises");
        assert_eq!(value, json!(expected));
    }

    #[test]
    fn envelope_carries_success_false() {
        let error = Error::conflict("Username already exists.");
        let value = serde_json::to_value(&error).expect("error serialises");
        assert_eq!(
            value,
            json!({
                "success": false,
                "code": "conflict",
                "message": "Username already exists."
            })
        );
    }

    #[test]
    fn details_round_trip() {
        let error =
            Error::invalid_request("bad field").with_details(json!({ "field": "username" }));
        let value = serde_json::to_value(&error).expect("error serialises");
        let decoded: Error = serde_json::from_value(value).expect("error deserialises");
        assert_eq!(decoded, error);
    }

    #[test]
    fn blank_messages_are_rejected() {
        let err = Error::try_new(ErrorCode::InternalError, "   ")
            .expect_err("blank message must be rejected");
        assert_eq!(err, ErrorValidationError::EmptyMessage);
    }
}
