//! HTTP transport implementation for the JSON-RPC client

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::HttpTransportConfig;
use crate::error::TransportError;
use crate::transport::{Transport, TransportRequest, TransportType};

/// HTTP transport backed by a reqwest client.
///
/// The response body is returned for every status code. JSON-RPC servers
/// commonly report failures as error objects on non-2xx responses, so the
/// status alone says nothing about whether the body is usable.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport with default settings
    pub fn new() -> Result<Self, TransportError> {
        Self::with_config(&HttpTransportConfig::default())
    }

    /// Create a new HTTP transport from explicit settings
    pub fn with_config(config: &HttpTransportConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout);

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create HTTP transport with custom client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else if error.is_connect() {
        TransportError::ConnectionFailed(error.to_string())
    } else {
        TransportError::Http(error.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn transport_type(&self) -> TransportType {
        TransportType::Http
    }

    async fn send(&self, request: TransportRequest) -> Result<Bytes, TransportError> {
        if !matches!(request.url.scheme(), "http" | "https") {
            return Err(TransportError::Unsupported(format!(
                "Invalid scheme for HTTP transport: {}",
                request.url.scheme()
            )));
        }

        debug!(
            method = %request.method,
            url = %request.url,
            body_len = request.body.len(),
            "Sending HTTP request"
        );

        let mut builder = self.client.request(request.method, request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %request.url, status = %status, "HTTP request returned non-success status");
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        debug!(status = %status, body_len = body.len(), "Received HTTP response");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use url::Url;

    #[test]
    fn test_transport_type() {
        let transport = HttpTransport::new().unwrap();
        assert_eq!(transport.transport_type(), TransportType::Http);
    }

    #[tokio::test]
    async fn test_rejects_non_http_scheme() {
        let transport = HttpTransport::new().unwrap();
        let request = TransportRequest::post(
            Url::parse("ws://localhost:8080/rpc").unwrap(),
            HashMap::new(),
            b"{}".to_vec(),
        );

        let err = transport.send(request).await.unwrap_err();
        assert!(matches!(err, TransportError::Unsupported(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let transport = HttpTransport::new().unwrap();
        let request = TransportRequest::post(
            Url::parse(&format!("http://127.0.0.1:{}/rpc", port)).unwrap(),
            HashMap::new(),
            b"{}".to_vec(),
        );

        let err = transport.send(request).await.unwrap_err();
        assert!(matches!(
            err,
            TransportError::ConnectionFailed(_) | TransportError::Http(_)
        ));
    }
}
