//! Protocol-level errors returned to the client as JSON-RPC error objects.

use thiserror::Error;

use super::transport::ErrorCode;

/// Result type for request handlers.
pub type McpResult<T> = std::result::Result<T, McpError>;

/// Failures a handler reports back to the client.
///
/// The `Display` text is the exact message placed in the error object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum McpError {
    #[error("Method not found")]
    MethodNotFound,

    #[error("Tool not found")]
    ToolNotFound,

    /// `tools/call` params were absent or not a mapping.
    #[error("Invalid params")]
    InvalidParams,

    #[error("Tool name is required")]
    MissingToolName,

    /// A required tool argument was missing or had the wrong type.
    #[error("{0} is required")]
    MissingArgument(&'static str),

    #[error("Student not found")]
    StudentNotFound,
}

impl McpError {
    /// The JSON-RPC error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            McpError::MethodNotFound | McpError::ToolNotFound => ErrorCode::MethodNotFound,
            McpError::InvalidParams | McpError::MissingToolName | McpError::MissingArgument(_) => {
                ErrorCode::InvalidParams
            }
            McpError::StudentNotFound => ErrorCode::InternalError,
        }
    }

    /// The message placed in the JSON-RPC error object.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
