//! Error types for JSON-RPC client operations

use jrpc_protocol::{ResponseParseError, SerializationError};
use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Everything that can go wrong while performing a call.
///
/// A JSON-RPC error object sent back by the server is not a `ClientError`;
/// it arrives as a successfully parsed [`Response`](jrpc_protocol::Response)
/// carrying an error.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be encoded; nothing was sent
    #[error("Unable to parse request: {0}")]
    UnableToParseRequest(#[from] SerializationError),

    /// The response body was not a valid JSON-RPC 2.0 response
    #[error("Unable to parse response: {0}")]
    UnableToParseResponse(#[from] ResponseParseError),

    /// Passed through from the transport untouched
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// A callback-style call was made with no Tokio runtime to drive it
    #[error("No async runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// Transport-specific errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP transport error: {0}")]
    Http(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unsupported transport: {0}")]
    Unsupported(String),

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wrap an arbitrary error raised by a custom transport
    pub fn other(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Box::new(error))
    }
}

impl ClientError {
    /// Check if the request never left the client
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::UnableToParseRequest(_))
    }

    /// Check if the error came from the transport
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if the response carried a missing or wrong `jsonrpc` version
    pub fn is_bad_version(&self) -> bool {
        matches!(self, Self::UnableToParseResponse(e) if e.is_bad_version())
    }

    pub fn as_transport_error(&self) -> Option<&TransportError> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err: ClientError = TransportError::Timeout.into();
        assert!(err.is_transport_error());
        assert!(!err.is_request_error());
        assert!(matches!(err.as_transport_error(), Some(TransportError::Timeout)));

        let err: ClientError = ResponseParseError::BadJsonRpcVersion.into();
        assert!(err.is_bad_version());
        assert!(err.as_transport_error().is_none());

        let err: ClientError = SerializationError::unrepresentable("NaN").into();
        assert!(err.is_request_error());
        assert_eq!(
            err.to_string(),
            "Unable to parse request: value cannot be represented as JSON: NaN"
        );
    }

    #[test]
    fn test_missing_runtime_is_its_own_error() {
        let err: ClientError = tokio::runtime::Handle::try_current().unwrap_err().into();
        assert!(matches!(err, ClientError::NoRuntime(_)));
        assert!(!err.is_transport_error());
        assert!(err.to_string().starts_with("No async runtime available"));
    }

    #[test]
    fn test_other_transport_error_is_transparent() {
        let io = std::io::Error::other("socket closed");
        let err = TransportError::other(io);
        assert_eq!(err.to_string(), "socket closed");
    }
}
