//! MCP (Model Context Protocol) server for the student roster.
//!
//! Provides a JSON-RPC 2.0 interface over stdio exposing two read-only
//! tools: listing students (optionally by section) and looking one up by id.

/// Protocol-level errors and their JSON-RPC codes.
pub mod error;

/// MCP server implementation.
pub mod server;

/// Tool definitions and dispatch.
pub mod tools;

/// JSON-RPC 2.0 transport types.
pub mod transport;

pub use error::{McpError, McpResult};
pub use server::McpServer;
pub use tools::{get_tool_definitions, handle_tool_call, Tool, ToolDefinition};
pub use transport::{ErrorCode, JsonRpcError, JsonRpcRequest, JsonRpcResponse, RequestId};
