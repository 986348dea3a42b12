//! # JSON-RPC 2.0 Client Protocol
//!
//! The transport-agnostic half of a JSON-RPC 2.0 client: request envelopes that
//! validate themselves on construction, typed success/error responses, and a
//! strict parser turning decoded JSON into those responses.
//!
//! ## Features
//! - Requests with positional or named parameters, or none at all
//! - Fail-fast validation of id, method and parameter shape
//! - Deterministic response parsing with a coarse, stable error taxonomy
//! - No I/O: the client crate supplies transports
//!
//! ```rust
//! use jrpc_protocol::prelude::*;
//! use serde_json::json;
//!
//! let request = Request::with_positional("1", "sum", vec![json!(1), json!(2)]).unwrap();
//! let bytes = request.encode().unwrap();
//! assert!(!bytes.is_empty());
//!
//! let response = parse_response_bytes(br#"{"jsonrpc":"2.0","id":1,"result":3}"#).unwrap();
//! assert_eq!(response.id(), Some("1"));
//! assert_eq!(response.result(), Some(&json!(3)));
//! ```

pub mod error;
pub mod parser;
pub mod prelude;
pub mod request;
pub mod response;
pub mod types;

// Re-export main types
pub use error::{
    JsonRpcErrorCode, RequestValidationError, ResponseParseError, SerializationError,
};
pub use parser::{parse_response, parse_response_bytes, parse_response_error};
pub use request::{JsonRpcEncode, Request, RequestParams};
pub use response::{Response, ResponseError};
pub use types::{JsonRpcVersion, RequestId};

/// JSON-RPC 2.0 version constant
pub const JSONRPC_VERSION: &str = "2.0";

/// Standard JSON-RPC 2.0 error codes
pub mod error_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;

    // Server error range: -32099 to -32000
    pub const SERVER_ERROR_START: i64 = -32099;
    pub const SERVER_ERROR_END: i64 = -32000;
}
