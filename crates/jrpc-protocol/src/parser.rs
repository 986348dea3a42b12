//! Strict conversion of decoded JSON into [`Response`] values.
//!
//! Guards run in a fixed order and the first failing one decides the error:
//! version, id/error coherence, payload presence, error sub-object.
//!
//! `null` is treated as absent for `id` and `error`. For `result` it is a
//! regular value, since void methods answer with `"result": null`.
//!
//! Accepting `"id": null` widens the id check: a server that could not
//! read the request id answers with a null id and an error object, and that
//! error is kept instead of being lost to a shape failure. A null id is still
//! rejected on a response without an error.

use serde_json::{Map, Value};
use tracing::trace;

use crate::JSONRPC_VERSION;
use crate::error::ResponseParseError;
use crate::response::{Response, ResponseError};
use crate::types::RequestId;

fn non_null<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

/// Parse a decoded response object.
pub fn parse_response(object: &Map<String, Value>) -> Result<Response, ResponseParseError> {
    if object.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
        return Err(ResponseParseError::BadJsonRpcVersion);
    }

    let raw_id = non_null(object, "id");
    let raw_error = non_null(object, "error");
    let raw_result = object.get("result");

    let id = match raw_id {
        None if raw_error.is_some() => None,
        None => {
            return Err(ResponseParseError::InvalidResponseShape(
                "id is missing on a response without error",
            ));
        }
        Some(value) => Some(RequestId::from_value(value).ok_or(
            ResponseParseError::InvalidResponseShape("id must be a string or an integer"),
        )?),
    };

    if raw_error.is_none() && raw_result.is_none() {
        return Err(ResponseParseError::InvalidResponseShape(
            "response carries neither result nor error",
        ));
    }

    let error = match raw_error {
        None => None,
        Some(Value::Object(error_object)) => {
            let error = parse_response_error(error_object).map_err(|_| {
                ResponseParseError::InvalidResponseShape("malformed error object")
            })?;
            Some(error)
        }
        Some(_) => {
            return Err(ResponseParseError::InvalidResponseShape(
                "error must be an object",
            ));
        }
    };

    let result = match (raw_result, &error) {
        (Some(Value::Null), Some(_)) | (None, _) => None,
        (Some(_), Some(_)) => {
            return Err(ResponseParseError::InvalidResponseShape(
                "result and error are mutually exclusive",
            ));
        }
        (Some(value), None) => Some(value.clone()),
    };

    let id = id.map(|id| id.to_string());
    trace!(id = ?id, is_error = error.is_some(), "Parsed JSON-RPC response");

    Ok(Response::from_parts(id, result, error))
}

/// Parse the `error` member of a response.
///
/// `code` must be an integer and `message` a string; `data` is carried over
/// untouched.
pub fn parse_response_error(
    object: &Map<String, Value>,
) -> Result<ResponseError, ResponseParseError> {
    let code = object
        .get("code")
        .and_then(Value::as_i64)
        .ok_or(ResponseParseError::InvalidResponseShape(
            "error code must be an integer",
        ))?;

    let message = object.get("message").and_then(Value::as_str).ok_or(
        ResponseParseError::InvalidResponseShape("error message must be a string"),
    )?;

    Ok(ResponseError::new(code, message, object.get("data").cloned()))
}

/// Decode raw bytes and parse them as a response object.
pub fn parse_response_bytes(bytes: &[u8]) -> Result<Response, ResponseParseError> {
    match serde_json::from_slice::<Value>(bytes).map_err(ResponseParseError::Malformed)? {
        Value::Object(object) => parse_response(&object),
        _ => Err(ResponseParseError::NotAnObject),
    }
}
