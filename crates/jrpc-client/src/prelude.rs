//! # JSON-RPC Client Prelude
//!
//! This module provides convenient re-exports of the most commonly used types
//! and traits from the client library.
//!
//! ```rust
//! use jrpc_client::prelude::*;
//! ```

// Core client types
pub use crate::client::{JrpcClient, JrpcClientBuilder};
pub use crate::config::{ClientConfig, HttpTransportConfig};
pub use crate::error::{ClientError, ClientResult, TransportError};

// Transport types
pub use crate::transport::{HttpTransport, Transport, TransportRequest, TransportType};

// Re-export protocol types for convenience
pub use jrpc_protocol::prelude::*;

pub use url::Url;
