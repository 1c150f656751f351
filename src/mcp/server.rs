//! MCP server that reads JSON-RPC requests from an input stream and writes
//! one response per request to an output stream.
//!
//! The loop is strictly sequential: decode, dispatch, encode, flush, then
//! read the next request. A decode or encode failure ends the loop.

use std::io::{Read, Write};

use serde_json::{json, Map, Value};
use tracing::{debug, error, info};

use crate::config::ServerConfig;
use crate::errors::{Result, RosterError};
use crate::roster::Roster;

use super::error::{McpError, McpResult};
use super::tools::{get_tool_definitions, handle_tool_call};
use super::transport::{JsonRpcRequest, JsonRpcResponse};

/// The MCP server serving a borrowed, read-only roster.
pub struct McpServer<'a> {
    roster: &'a Roster,
    config: ServerConfig,
}

impl<'a> McpServer<'a> {
    /// Creates a new MCP server over the given roster.
    pub fn new(roster: &'a Roster, config: ServerConfig) -> Self {
        Self { roster, config }
    }

    /// Runs the server until the input is exhausted.
    ///
    /// Requests are decoded as a stream of JSON values, so no line framing is
    /// required. Each value is read as a generic JSON value first, so
    /// repeated keys keep their last occurrence. Returns the number of
    /// requests served on a clean end of input. A malformed or truncated request, or a failure to encode or
    /// write a response, is logged and returned as an error; nothing is
    /// written for the request that failed to decode.
    pub fn run<R: Read, W: Write>(&self, reader: R, mut writer: W) -> Result<usize> {
        info!(
            server = %self.config.server_name,
            students = self.roster.len(),
            "serving MCP requests"
        );

        let values = serde_json::Deserializer::from_reader(reader).into_iter::<Value>();
        let mut served = 0usize;

        for value in values {
            let request = match value.and_then(JsonRpcRequest::from_value) {
                Ok(request) => request,
                Err(e) => {
                    error!("error decoding request: {}", e);
                    return Err(RosterError::Decode(e));
                }
            };

            let response = self.handle_request(&request);
            if let Err(e) = write_response(&mut writer, &response) {
                error!("error encoding response: {}", e);
                return Err(e);
            }
            served += 1;
        }

        info!(served, "input closed, shutting down");
        Ok(served)
    }

    /// Dispatches a decoded request to the appropriate handler.
    ///
    /// Always produces exactly one response carrying the request's id.
    pub fn handle_request(&self, request: &JsonRpcRequest) -> JsonRpcResponse {
        debug!(method = %request.method, id = ?request.id, "handling request");
        let id = request.id.clone();

        let result = match request.method.as_str() {
            "initialize" => Ok(self.handle_initialize()),
            "tools/list" => Ok(self.handle_tools_list()),
            "tools/call" => self.handle_tools_call(request.params.as_ref()),
            _ => Err(McpError::MethodNotFound),
        };

        match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => {
                debug!(method = %request.method, error = %e, "request failed");
                JsonRpcResponse::error(id, e.code(), e.message())
            }
        }
    }

    /// Handles the `initialize` method, returning server capabilities.
    fn handle_initialize(&self) -> Value {
        json!({
            "protocolVersion": self.config.protocol_version,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": self.config.server_name,
                "version": self.config.server_version
            }
        })
    }

    /// Handles the `tools/list` method, returning all available tool definitions.
    fn handle_tools_list(&self) -> Value {
        json!({ "tools": get_tool_definitions() })
    }

    /// Handles the `tools/call` method, dispatching to the appropriate tool handler.
    ///
    /// `params` must be a mapping with a string `name`. A missing or
    /// non-mapping `arguments` value is treated as an empty mapping.
    fn handle_tools_call(&self, params: Option<&Value>) -> McpResult<Value> {
        let params = params
            .and_then(|p| p.as_object())
            .ok_or(McpError::InvalidParams)?;

        let tool_name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or(McpError::MissingToolName)?;

        let empty = Map::new();
        let arguments = params
            .get("arguments")
            .and_then(|v| v.as_object())
            .unwrap_or(&empty);

        handle_tool_call(self.roster, tool_name, arguments)
    }
}

/// Writes one response as a single line and flushes it.
fn write_response<W: Write>(writer: &mut W, response: &JsonRpcResponse) -> Result<()> {
    let json_line = serde_json::to_string(response).map_err(RosterError::Encode)?;
    writer.write_all(json_line.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::transport::RequestId;

    fn request(method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: RequestId::from(1),
            method: method.to_string(),
            params,
        }
    }

    #[test]
    fn test_initialize_uses_config() {
        let roster = Roster::seed();
        let config = ServerConfig {
            server_name: "custom".to_string(),
            ..ServerConfig::default()
        };
        let server = McpServer::new(&roster, config);
        let response = server.handle_request(&request("initialize", None));
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "custom");
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[test]
    fn test_empty_method_is_not_found() {
        let roster = Roster::seed();
        let server = McpServer::new(&roster, ServerConfig::default());
        let response = server.handle_request(&JsonRpcRequest::default());
        assert_eq!(response.error.unwrap().code, -32601);
        assert_eq!(response.id, RequestId::Null);
    }

    #[test]
    fn test_tools_call_with_array_params() {
        let roster = Roster::seed();
        let server = McpServer::new(&roster, ServerConfig::default());
        let response = server.handle_request(&request("tools/call", Some(json!([1, 2]))));
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert_eq!(error.message, "Invalid params");
    }

    #[test]
    fn test_write_response_appends_newline() {
        let mut out = Vec::new();
        let response = JsonRpcResponse::success(RequestId::from(1), json!({}));
        write_response(&mut out, &response).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"jsonrpc\":\"2.0\",\"id\":1,\"result\":{}}\n"
        );
    }
}
