//! Main JSON-RPC client implementation

use bytes::Bytes;
use jrpc_protocol::{JsonRpcEncode, Response, parse_response_bytes};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, TransportError};
use crate::transport::{HttpTransport, SharedTransport, Transport, TransportRequest};

/// JSON-RPC 2.0 client.
///
/// Holds no per-call state: cloning is cheap and concurrent calls are fully
/// independent of each other.
#[derive(Clone)]
pub struct JrpcClient {
    /// Transport layer
    transport: SharedTransport,
    /// Configuration
    config: Arc<ClientConfig>,
}

impl std::fmt::Debug for JrpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JrpcClient")
            .field("transport", &self.transport.transport_type())
            .field("config", &self.config)
            .finish()
    }
}

impl JrpcClient {
    /// Create a new client with the given transport
    pub fn new(transport: SharedTransport, config: ClientConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    /// Create a client builder
    pub fn builder() -> JrpcClientBuilder {
        JrpcClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform one call and wait for its outcome.
    ///
    /// Resolves exactly once with either the parsed response or the first
    /// error encountered. An encoding failure returns before the transport is
    /// touched; transport errors are returned as they were raised.
    pub async fn perform<R>(&self, request: &R, url: &Url) -> ClientResult<Response>
    where
        R: JsonRpcEncode + ?Sized,
    {
        let body = self.encode(request)?;
        self.exchange(body, url.clone()).await
    }

    /// Perform one call, delivering the outcome to `on_complete`.
    ///
    /// The request is encoded before this returns. If encoding fails, or no
    /// Tokio runtime is running on the calling thread, the callback runs
    /// immediately with the error. Otherwise the exchange runs on a spawned
    /// task and a panic inside it is delivered as a transport error.
    pub fn perform_with<R, F>(&self, request: &R, url: &Url, on_complete: F)
    where
        R: JsonRpcEncode + ?Sized,
        F: FnOnce(ClientResult<Response>) + Send + 'static,
    {
        let body = match self.encode(request) {
            Ok(body) => body,
            Err(e) => {
                on_complete(Err(e));
                return;
            }
        };

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!(error = %e, "perform_with called outside a Tokio runtime");
                on_complete(Err(ClientError::NoRuntime(e)));
                return;
            }
        };

        let client = self.clone();
        let url = url.clone();
        let exchange = runtime.spawn(async move { client.exchange(body, url).await });

        runtime.spawn(async move {
            let outcome = match exchange.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(error = %e, "JSON-RPC call task did not complete");
                    Err(ClientError::Transport(TransportError::other(e)))
                }
            };
            on_complete(outcome);
        });
    }

    fn encode<R>(&self, request: &R) -> ClientResult<Bytes>
    where
        R: JsonRpcEncode + ?Sized,
    {
        let body = request.encode().map_err(|e| {
            warn!(error = %e, "Failed to encode JSON-RPC request");
            ClientError::UnableToParseRequest(e)
        })?;

        if self.config.logging.log_requests {
            debug!(body = %String::from_utf8_lossy(&body), "Encoded JSON-RPC request");
        }

        Ok(Bytes::from(body))
    }

    async fn exchange(&self, body: Bytes, url: Url) -> ClientResult<Response> {
        let request = TransportRequest::post(url, self.config.request_headers(), body);

        let raw = self.transport.send(request).await.map_err(|e| {
            warn!(
                transport = %self.transport.transport_type(),
                error = %e,
                "Transport failed"
            );
            ClientError::Transport(e)
        })?;

        if self.config.logging.log_responses {
            debug!(body = %String::from_utf8_lossy(&raw), "Received JSON-RPC response");
        }

        let response = parse_response_bytes(&raw).map_err(|e| {
            warn!(error = %e, "Failed to parse JSON-RPC response");
            ClientError::UnableToParseResponse(e)
        })?;

        debug!(
            id = response.id().unwrap_or("<none>"),
            is_error = response.is_error(),
            "JSON-RPC call completed"
        );

        Ok(response)
    }
}

/// Builder for creating JSON-RPC clients
pub struct JrpcClientBuilder {
    transport: Option<SharedTransport>,
    config: Option<ClientConfig>,
    headers: Vec<(String, String)>,
}

impl JrpcClientBuilder {
    /// Create a new client builder
    pub fn new() -> Self {
        Self {
            transport: None,
            config: None,
            headers: Vec::new(),
        }
    }

    /// Set transport
    pub fn with_transport(self, transport: impl Transport + 'static) -> Self {
        self.with_shared_transport(Arc::new(transport))
    }

    /// Set an already shared transport
    pub fn with_shared_transport(mut self, transport: SharedTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set configuration
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Add a header on top of the configured ones
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Build the client, falling back to the default HTTP transport
    pub fn build(self) -> ClientResult<JrpcClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new()?),
        };

        let mut config = self.config.unwrap_or_default();
        config.headers.extend(self.headers);

        Ok(JrpcClient::new(transport, config))
    }
}

impl Default for JrpcClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
