use thiserror::Error;

/// Errors that can occur while configuring or running the roster server.
///
/// Tool-level failures never surface here; they are reported to the client as
/// JSON-RPC error responses (see [`crate::mcp::McpError`]). Only setup and
/// transport failures do.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("roster error: {message}")]
    Roster { message: String },

    #[error("failed to decode request: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results using `RosterError`.
pub type Result<T> = std::result::Result<T, RosterError>;
