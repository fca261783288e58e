use serde::Serialize;
use thiserror::Error;
use trust_dns_resolver::error::ResolveError;
use utoipa::ToSchema;

/// Rejection of a sign-up payload, rendered as a 400 body.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(into = "ErrorPayload")]
pub enum ValidationError {
    #[error("Missing param: {0}")]
    MissingParam(String),
    #[error("Invalid param: {0}")]
    InvalidParam(String),
}

impl ValidationError {
    pub fn missing(param: impl Into<String>) -> Self {
        Self::MissingParam(param.into())
    }

    pub fn invalid(param: impl Into<String>) -> Self {
        Self::InvalidParam(param.into())
    }

    /// Name of the offending body field.
    pub fn param(&self) -> &str {
        match self {
            Self::MissingParam(param) | Self::InvalidParam(param) => param,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingParam(_) => "MISSING_PARAM",
            Self::InvalidParam(_) => "INVALID_PARAM",
        }
    }
}

/// Opaque fault body for 500 responses. Never carries the underlying cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Error, Serialize)]
#[serde(into = "ErrorPayload")]
#[error("Internal server error")]
pub struct ServerError;

/// # Error Response Payload
///
/// JSON shape shared by every failure response.
///
/// ## Example JSON
/// ```json
/// {
///   "error": "MISSING_PARAM",
///   "message": "Missing param: email",
///   "param": "email"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorPayload {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl ErrorPayload {
    /// Payload for request bodies the JSON extractor could not decode.
    pub fn malformed_body(detail: impl std::fmt::Display) -> Self {
        Self {
            error: "MALFORMED_BODY".to_string(),
            message: format!("Request body is not a JSON object of strings: {}", detail),
            param: None,
        }
    }
}

impl From<ValidationError> for ErrorPayload {
    fn from(err: ValidationError) -> Self {
        Self {
            error: err.code().to_string(),
            message: err.to_string(),
            param: Some(err.param().to_string()),
        }
    }
}

impl From<ServerError> for ErrorPayload {
    fn from(err: ServerError) -> Self {
        Self {
            error: "SERVER_ERROR".to_string(),
            message: err.to_string(),
            param: None,
        }
    }
}

/// Fault raised by an [`EmailValidator`](crate::validation::EmailValidator).
///
/// Any variant reaching the controller is answered with a 500.
#[derive(Debug, Error)]
pub enum EmailValidatorError {
    #[error("failed to initialise DNS resolver: {0}")]
    ResolverInit(#[source] std::io::Error),
    #[error("DNS lookup for {domain} failed: {source}")]
    Lookup {
        domain: String,
        #[source]
        source: ResolveError,
    },
    #[error("email validator unavailable: {0}")]
    Unavailable(String),
}

/// Invalid service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("SIGNUP_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("EMAIL_VALIDATION must be `syntax` or `dns`, got {0:?}")]
    UnknownValidationMode(String),
    #[error("DNS_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidDnsTimeout(String),
    #[error("LOG_FORMAT must be `pretty` or `json`, got {0:?}")]
    UnknownLogFormat(String),
}
