use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::error::JsonRpcErrorCode;
use crate::types::JsonRpcVersion;

/// The `error` member of a failed JSON-RPC response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseError {
    code: i64,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl ResponseError {
    pub fn new(code: i64, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
        }
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Free-form diagnostic payload attached by the server
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn kind(&self) -> JsonRpcErrorCode {
        JsonRpcErrorCode::from_code(self.code)
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JSON-RPC Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ResponseError {}

/// Outcome of a remote call.
///
/// `result` and `error` are meant to be mutually exclusive. The parser
/// guarantees it for anything it returns; the type itself does not.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    id: Option<String>,
    result: Option<Value>,
    error: Option<ResponseError>,
}

impl Response {
    pub(crate) fn from_parts(
        id: Option<String>,
        result: Option<Value>,
        error: Option<ResponseError>,
    ) -> Self {
        Self { id, result, error }
    }

    pub fn success(id: impl Into<String>, result: Value) -> Self {
        Self::from_parts(Some(id.into()), Some(result), None)
    }

    pub fn failure(id: Option<String>, error: ResponseError) -> Self {
        Self::from_parts(id, None, Some(error))
    }

    /// The id echoed by the server, normalized to a string.
    ///
    /// `None` when the server could not determine the request id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ResponseError> {
        self.error.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Convert into the remote call's outcome.
    ///
    /// A success without a `result` member yields `Value::Null`.
    pub fn into_result(self) -> Result<Value, ResponseError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

impl Serialize for Response {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("jsonrpc", &JsonRpcVersion::V2_0)?;
        match &self.id {
            Some(id) => map.serialize_entry("id", id)?,
            None => map.serialize_entry("id", &Value::Null)?,
        }
        match &self.error {
            Some(error) => map.serialize_entry("error", error)?,
            None => map.serialize_entry("result", self.result.as_ref().unwrap_or(&Value::Null))?,
        }
        map.end()
    }
}
