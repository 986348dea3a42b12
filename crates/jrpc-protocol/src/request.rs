use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::{RequestValidationError, SerializationError};
use crate::types::JsonRpcVersion;

/// Parameters for a JSON-RPC request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestParams {
    /// Positional parameters as an array
    Positional(Vec<Value>),
    /// Named parameters as an object
    Named(HashMap<String, Value>),
}

impl RequestParams {
    /// Interpret an untyped value as parameters.
    ///
    /// Arrays become positional, objects become named; every other value is
    /// rejected.
    pub fn from_value(value: Value) -> Result<Self, RequestValidationError> {
        match value {
            Value::Array(vec) => Ok(RequestParams::Positional(vec)),
            Value::Object(map) => Ok(RequestParams::Named(map.into_iter().collect())),
            _ => Err(RequestValidationError::BadParameters),
        }
    }

    /// Get a parameter by name (for named params only)
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            RequestParams::Named(map) => map.get(key),
            RequestParams::Positional(_) => None,
        }
    }

    /// Get a parameter by index (for positional params only)
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            RequestParams::Positional(vec) => vec.get(index),
            RequestParams::Named(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RequestParams::Named(map) => map.is_empty(),
            RequestParams::Positional(vec) => vec.is_empty(),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            RequestParams::Named(map) => {
                Value::Object(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            }
            RequestParams::Positional(arr) => Value::Array(arr.clone()),
        }
    }
}

impl From<HashMap<String, Value>> for RequestParams {
    fn from(map: HashMap<String, Value>) -> Self {
        RequestParams::Named(map)
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(map: Map<String, Value>) -> Self {
        RequestParams::Named(map.into_iter().collect())
    }
}

impl From<Vec<Value>> for RequestParams {
    fn from(vec: Vec<Value>) -> Self {
        RequestParams::Positional(vec)
    }
}

/// Anything that can be put on the wire as a JSON-RPC request body.
///
/// [`Request`] is the canonical implementation. The client accepts any
/// implementor, so alternative request representations can be sent without
/// going through `Request`.
pub trait JsonRpcEncode {
    fn encode(&self) -> Result<Vec<u8>, SerializationError>;
}

/// A validated JSON-RPC 2.0 request.
///
/// Absent params are omitted from the serialized object rather than sent as
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    #[serde(rename = "jsonrpc")]
    version: JsonRpcVersion,
    id: String,
    method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<RequestParams>,
}

impl Request {
    /// Build a request, rejecting blank ids and method names.
    pub fn new(
        id: impl Into<String>,
        method: impl Into<String>,
        params: Option<RequestParams>,
    ) -> Result<Self, RequestValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RequestValidationError::MissingId);
        }

        let method = method.into();
        if method.trim().is_empty() {
            return Err(RequestValidationError::MissingMethod);
        }

        Ok(Self {
            version: JsonRpcVersion::V2_0,
            id,
            method,
            params,
        })
    }

    /// Create a new request with no parameters
    pub fn without_params(
        id: impl Into<String>,
        method: impl Into<String>,
    ) -> Result<Self, RequestValidationError> {
        Self::new(id, method, None)
    }

    /// Create a new request with positional parameters
    pub fn with_positional(
        id: impl Into<String>,
        method: impl Into<String>,
        params: Vec<Value>,
    ) -> Result<Self, RequestValidationError> {
        Self::new(id, method, Some(RequestParams::Positional(params)))
    }

    /// Create a new request with named parameters
    pub fn with_named(
        id: impl Into<String>,
        method: impl Into<String>,
        params: HashMap<String, Value>,
    ) -> Result<Self, RequestValidationError> {
        Self::new(id, method, Some(RequestParams::Named(params)))
    }

    /// Create a request from untyped parameters.
    ///
    /// `Some(array)` and `Some(object)` are accepted; any other value,
    /// including `null`, fails with [`RequestValidationError::BadParameters`]
    /// once the id and method have passed.
    pub fn from_value_params(
        id: impl Into<String>,
        method: impl Into<String>,
        params: Option<Value>,
    ) -> Result<Self, RequestValidationError> {
        let request = Self::new(id, method, None)?;
        let params = params.map(RequestParams::from_value).transpose()?;
        Ok(Self { params, ..request })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn params(&self) -> Option<&RequestParams> {
        self.params.as_ref()
    }

    /// Get a parameter by name (if params are named)
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.as_ref()?.get(name)
    }

    /// Get a parameter by index (if params are positional)
    pub fn param_at(&self, index: usize) -> Option<&Value> {
        self.params.as_ref()?.get_index(index)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, SerializationError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl JsonRpcEncode for Request {
    fn encode(&self) -> Result<Vec<u8>, SerializationError> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl<T: JsonRpcEncode + ?Sized> JsonRpcEncode for &T {
    fn encode(&self) -> Result<Vec<u8>, SerializationError> {
        (**self).encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(request: &Request) -> Value {
        serde_json::from_slice(&request.encode().unwrap()).unwrap()
    }

    #[test]
    fn test_request_with_positional_params() {
        let request =
            Request::with_positional("1", "mock.Method", vec![json!("1"), json!("2"), json!("3")])
                .unwrap();

        let raw = decode(&request);
        assert_eq!(raw["jsonrpc"], "2.0");
        assert_eq!(raw["id"], "1");
        assert_eq!(raw["method"], "mock.Method");
        assert_eq!(raw["params"], json!(["1", "2", "3"]));
        assert_eq!(raw.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_request_with_named_params() {
        let mut params = HashMap::new();
        params.insert("first".to_string(), json!("1"));
        params.insert("second".to_string(), json!(2));
        params.insert("third".to_string(), json!(true));

        let request = Request::with_named("1", "mock.Method", params).unwrap();

        assert_eq!(request.param("second"), Some(&json!(2)));
        assert_eq!(request.param("missing"), None);
        assert_eq!(request.param_at(0), None);

        let raw = decode(&request);
        assert_eq!(raw["params"], json!({"first": "1", "second": 2, "third": true}));
    }

    #[test]
    fn test_request_without_params_omits_key() {
        let request = Request::without_params("7", "ping").unwrap();
        let raw = decode(&request);

        assert!(raw.get("params").is_none());
        assert_eq!(raw["id"], "7");
        assert_eq!(request.to_json().unwrap(), r#"{"jsonrpc":"2.0","id":"7","method":"ping"}"#);
    }

    #[test]
    fn test_empty_params_keep_their_shape() {
        let positional = Request::with_positional("1", "m", vec![]).unwrap();
        let named = Request::with_named("1", "m", HashMap::new()).unwrap();

        assert_eq!(decode(&positional)["params"], json!([]));
        assert_eq!(decode(&named)["params"], json!({}));
    }

    #[test]
    fn test_nested_values_survive_serialization() {
        let params = vec![json!({"a": [1, 2.5, null, {"b": false}]}), json!(-3)];
        let request = Request::with_positional("x", "nested", params.clone()).unwrap();

        assert_eq!(decode(&request)["params"], Value::Array(params));
    }

    #[test]
    fn test_blank_id_is_rejected_first() {
        for id in ["", " ", "\t  "] {
            assert_eq!(
                Request::from_value_params(id, "", Some(json!(5))),
                Err(RequestValidationError::MissingId)
            );
            assert_eq!(
                Request::without_params(id, "method"),
                Err(RequestValidationError::MissingId)
            );
        }
    }

    #[test]
    fn test_blank_method_is_rejected() {
        assert_eq!(
            Request::from_value_params("1", "   ", Some(json!("scalar"))),
            Err(RequestValidationError::MissingMethod)
        );
        assert_eq!(
            Request::with_positional("1", "", vec![]),
            Err(RequestValidationError::MissingMethod)
        );
    }

    #[test]
    fn test_scalar_params_are_rejected() {
        for params in [json!("text"), json!(42), json!(1.5), json!(true), json!(null)] {
            assert_eq!(
                Request::from_value_params("1", "method", Some(params)),
                Err(RequestValidationError::BadParameters)
            );
        }
    }

    #[test]
    fn test_value_params_pick_the_right_shape() {
        let positional = Request::from_value_params("1", "m", Some(json!([1, "two"]))).unwrap();
        assert_eq!(positional.param_at(1), Some(&json!("two")));

        let named = Request::from_value_params("1", "m", Some(json!({"k": "v"}))).unwrap();
        assert_eq!(named.param("k"), Some(&json!("v")));

        let none = Request::from_value_params("1", "m", None).unwrap();
        assert!(none.params().is_none());
    }

    #[test]
    fn test_ids_are_stored_untrimmed() {
        let request = Request::without_params(" 42 ", " sum ").unwrap();
        assert_eq!(request.id(), " 42 ");
        assert_eq!(request.method(), " sum ");
    }

    #[test]
    fn test_params_to_value() {
        let params: RequestParams = json!({"key": "value"})
            .as_object()
            .cloned()
            .unwrap()
            .into();
        assert_eq!(params.to_value(), json!({"key": "value"}));
        assert!(!params.is_empty());

        let params: RequestParams = vec![json!("first")].into();
        assert_eq!(params.get_index(0), Some(&json!("first")));
        assert_eq!(params.get("first"), None);
    }
}
