//! Configuration types for the JSON-RPC client

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Header name the client always sets on outgoing calls
pub const CONTENT_TYPE: &str = "Content-Type";

/// Media type of every JSON-RPC body
pub const APPLICATION_JSON: &str = "application/json";

/// Main client configuration.
///
/// Fixed once the client is built and shared read-only between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Headers sent with every request
    pub headers: HashMap<String, String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Whether to log request bodies at debug level
    pub log_requests: bool,

    /// Whether to log response bodies at debug level
    pub log_responses: bool,
}

/// Settings for the built-in HTTP transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpTransportConfig {
    /// Total request timeout
    #[serde(with = "duration_serde")]
    pub timeout: Duration,

    /// Connection establishment timeout
    #[serde(with = "duration_serde")]
    pub connect_timeout: Duration,

    /// User agent string
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut headers = HashMap::new();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

        Self {
            headers,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_requests: true,
            log_responses: true,
        }
    }
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: Some(format!("jrpc-client/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl ClientConfig {
    /// Default configuration plus the given headers
    pub fn with_headers<I, K, V>(headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (name, value) in headers {
            config.headers.insert(name.into(), value.into());
        }
        config
    }

    /// Headers for one outgoing call.
    ///
    /// Configured headers plus `Content-Type: application/json`, which replaces
    /// any configured content type regardless of its casing.
    pub fn request_headers(&self) -> HashMap<String, String> {
        let mut headers: HashMap<String, String> = self
            .headers
            .iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case(CONTENT_TYPE))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
        headers
    }
}

// Helper module for Duration serialization
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let config = ClientConfig::default();
        assert_eq!(config.headers.len(), 1);
        assert_eq!(
            config.headers.get(CONTENT_TYPE).map(String::as_str),
            Some(APPLICATION_JSON)
        );
    }

    #[test]
    fn test_request_headers_force_json_content_type() {
        let config = ClientConfig::with_headers([
            ("content-type", "text/plain"),
            ("custom-field1", "custom-value1"),
            ("custom-field2", "custom-value2"),
        ]);

        let headers = config.request_headers();
        assert_eq!(headers.get("custom-field1").map(String::as_str), Some("custom-value1"));
        assert_eq!(headers.get("custom-field2").map(String::as_str), Some("custom-value2"));
        assert!(!headers.contains_key("content-type"));
        assert_eq!(headers.get(CONTENT_TYPE).map(String::as_str), Some(APPLICATION_JSON));
    }

    #[test]
    fn test_config_serialization() {
        let config = ClientConfig::with_headers([("x-api-key", "secret")]);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"logging": {"log_requests": false}}"#).unwrap();
        assert!(!config.logging.log_requests);
        assert!(config.logging.log_responses);
        assert!(config.headers.contains_key(CONTENT_TYPE));
    }

    #[test]
    fn test_transport_config_durations_in_millis() {
        let config: HttpTransportConfig =
            serde_json::from_str(r#"{"timeout": 1500, "user_agent": null}"#).unwrap();
        assert_eq!(config.timeout, Duration::from_millis(1500));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.is_none());

        let json = serde_json::to_value(&HttpTransportConfig::default()).unwrap();
        assert_eq!(json["timeout"], 30_000);
    }
}
