use std::fmt;
use thiserror::Error;

use crate::error_codes;

/// Reasons a [`Request`](crate::Request) cannot be constructed.
///
/// Checks run in a fixed order (id, method, params) and the first failing
/// check is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    #[error("request id is empty")]
    MissingId,

    #[error("request method is empty")]
    MissingMethod,

    #[error("request params must be an array, an object, or absent")]
    BadParameters,
}

/// Failure to turn a request into wire bytes.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("value cannot be represented as JSON: {0}")]
    Unrepresentable(String),
}

impl SerializationError {
    pub fn unrepresentable(message: impl Into<String>) -> Self {
        Self::Unrepresentable(message.into())
    }
}

/// Failure to turn a raw payload into a [`Response`](crate::Response).
///
/// Malformed error sub-objects are deliberately not distinguished from other
/// shape problems; they all surface as `InvalidResponseShape`.
#[derive(Debug, Error)]
pub enum ResponseParseError {
    #[error("response body is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("response body is not a JSON object")]
    NotAnObject,

    #[error("missing or unsupported jsonrpc version")]
    BadJsonRpcVersion,

    #[error("invalid response shape: {0}")]
    InvalidResponseShape(&'static str),
}

impl ResponseParseError {
    /// True for the version guard failure.
    pub fn is_bad_version(&self) -> bool {
        matches!(self, Self::BadJsonRpcVersion)
    }
}

/// Category of a JSON-RPC error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonRpcErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
    ServerError(i64),      // -32099 to -32000
    ApplicationError(i64), // anything outside the reserved codes
}

impl JsonRpcErrorCode {
    pub fn from_code(code: i64) -> Self {
        match code {
            error_codes::PARSE_ERROR => JsonRpcErrorCode::ParseError,
            error_codes::INVALID_REQUEST => JsonRpcErrorCode::InvalidRequest,
            error_codes::METHOD_NOT_FOUND => JsonRpcErrorCode::MethodNotFound,
            error_codes::INVALID_PARAMS => JsonRpcErrorCode::InvalidParams,
            error_codes::INTERNAL_ERROR => JsonRpcErrorCode::InternalError,
            error_codes::SERVER_ERROR_START..=error_codes::SERVER_ERROR_END => {
                JsonRpcErrorCode::ServerError(code)
            }
            _ => JsonRpcErrorCode::ApplicationError(code),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            JsonRpcErrorCode::ParseError => error_codes::PARSE_ERROR,
            JsonRpcErrorCode::InvalidRequest => error_codes::INVALID_REQUEST,
            JsonRpcErrorCode::MethodNotFound => error_codes::METHOD_NOT_FOUND,
            JsonRpcErrorCode::InvalidParams => error_codes::INVALID_PARAMS,
            JsonRpcErrorCode::InternalError => error_codes::INTERNAL_ERROR,
            JsonRpcErrorCode::ServerError(code) => *code,
            JsonRpcErrorCode::ApplicationError(code) => *code,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            JsonRpcErrorCode::ParseError => "Parse error",
            JsonRpcErrorCode::InvalidRequest => "Invalid Request",
            JsonRpcErrorCode::MethodNotFound => "Method not found",
            JsonRpcErrorCode::InvalidParams => "Invalid params",
            JsonRpcErrorCode::InternalError => "Internal error",
            JsonRpcErrorCode::ServerError(_) => "Server error",
            JsonRpcErrorCode::ApplicationError(_) => "Application error",
        }
    }
}

impl fmt::Display for JsonRpcErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
