//! # JSON-RPC 2.0 Client Library
//!
//! An asynchronous JSON-RPC 2.0 client. Requests are validated and encoded
//! by [`jrpc_protocol`], shipped through a [`Transport`], and the raw reply is
//! parsed back into a typed [`Response`](jrpc_protocol::Response).
//!
//! ## Features
//!
//! - **Pluggable transports**: anything implementing [`Transport`]; an HTTP
//!   transport built on reqwest is included
//! - **Single-resolution calls**: every call yields exactly one outcome, either
//!   awaited or delivered to a one-shot callback
//! - **Read-only configuration**: headers are fixed at construction and shared
//!   safely between concurrent calls
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jrpc_client::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = JrpcClient::builder()
//!         .with_header("Authorization", "Bearer token")
//!         .build()?;
//!
//!     let request = Request::with_positional("1", "sum", vec![json!(1), json!(2)])?;
//!     let url = Url::parse("http://localhost:8080/rpc")?;
//!
//!     let response = client.perform(&request, &url).await?;
//!     println!("sum = {:?}", response.into_result()?);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod prelude;
pub mod transport;

// Re-export main types
pub use client::{JrpcClient, JrpcClientBuilder};
pub use config::{ClientConfig, HttpTransportConfig, LoggingConfig};
pub use error::{ClientError, ClientResult, TransportError};

// Re-export transport types
pub use transport::{HttpTransport, SharedTransport, Transport, TransportRequest, TransportType};

// Re-export protocol types for convenience
pub use jrpc_protocol::*;
