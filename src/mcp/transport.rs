//! JSON-RPC 2.0 envelope types for the MCP server.
//!
//! Requests are decoded leniently: every field falls back to its zero value
//! when absent, so a request without `params` or `id` still reaches the
//! dispatcher. Responses always carry exactly one of `result` or `error`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version tag written on every response.
pub const JSONRPC_VERSION: &str = "2.0";

/// Correlation identifier of a request, echoed back verbatim on the response.
///
/// An absent id decodes as [`RequestId::Null`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(serde_json::Number),
    String(String),
    #[default]
    Null,
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

/// A JSON-RPC 2.0 request received from the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonRpcRequest {
    /// Protocol version; expected to be `"2.0"` but not enforced.
    pub jsonrpc: String,
    /// Request identifier. May be a number, string, or null.
    pub id: RequestId,
    /// The RPC method name.
    pub method: String,
    /// Method parameters. Their shape depends on the method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Builds a request from one decoded JSON value.
    ///
    /// A top-level `null` is an empty request (and is answered as an unknown
    /// method). Duplicate keys have already collapsed to their last
    /// occurrence while decoding into `Value`.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }
}

/// A JSON-RPC 2.0 response sent back to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version; always `"2.0"`.
    pub jsonrpc: String,
    /// The request identifier that this response corresponds to.
    pub id: RequestId,
    /// The result on success; absent on error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// The error on failure; absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Creates a successful JSON-RPC response.
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Creates an error JSON-RPC response.
    pub fn error(id: RequestId, code: ErrorCode, message: String) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code: code.as_i32(),
                message,
            }),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Numeric error code.
    pub code: i32,
    /// Human-readable error message.
    pub message: String,
}

/// JSON-RPC 2.0 error codes used by this server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The requested method or tool does not exist.
    MethodNotFound,
    /// Invalid method parameters.
    InvalidParams,
    /// The request was valid but could not be satisfied.
    InternalError,
}

impl ErrorCode {
    /// Returns the numeric error code as defined by JSON-RPC 2.0.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
        }
    }
}
