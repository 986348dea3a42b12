//! Transport layer for the JSON-RPC client
//!
//! A transport moves one request body to a URL and hands back the response
//! body. It knows nothing about JSON-RPC.

use async_trait::async_trait;
use bytes::Bytes;
use ::http::Method;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

use crate::error::TransportError;

pub mod http;

// Re-export transport implementations
pub use self::http::HttpTransport;

/// Transport type enumeration
#[derive(Debug, Clone, PartialEq)]
pub enum TransportType {
    /// Plain HTTP(S) request/response
    Http,
    /// Any transport supplied by the caller
    Custom(String),
}

impl std::fmt::Display for TransportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportType::Http => write!(f, "HTTP"),
            TransportType::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// One outgoing exchange
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: Url,
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl TransportRequest {
    /// Create a POST request, the only verb JSON-RPC calls use
    pub fn post(url: Url, headers: HashMap<String, String>, body: impl Into<Bytes>) -> Self {
        Self {
            url,
            method: Method::POST,
            headers,
            body: body.into(),
        }
    }
}

/// Transport trait defining the interface for all transport implementations.
///
/// `send` is invoked once per call and must complete exactly once. Timeouts
/// belong to the implementation and are reported as ordinary errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Get transport type
    fn transport_type(&self) -> TransportType;

    /// Deliver the request and return the raw response body
    async fn send(&self, request: TransportRequest) -> Result<Bytes, TransportError>;
}

/// Type alias for a shared transport
pub type SharedTransport = Arc<dyn Transport>;
