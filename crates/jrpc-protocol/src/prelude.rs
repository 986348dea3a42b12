//! # JSON-RPC Protocol Prelude
//!
//! Convenient re-exports of the most commonly used protocol types.
//!
//! ```rust
//! use jrpc_protocol::prelude::*;
//! ```

// Core JSON-RPC types
pub use crate::error::{
    JsonRpcErrorCode, RequestValidationError, ResponseParseError, SerializationError,
};
pub use crate::parser::{parse_response, parse_response_bytes, parse_response_error};
pub use crate::request::{JsonRpcEncode, Request, RequestParams};
pub use crate::response::{Response, ResponseError};
pub use crate::types::{JsonRpcVersion, RequestId};

// Standard error codes
pub use crate::error_codes::*;
