use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RosterError};
use crate::roster::Roster;

/// MCP protocol revision announced by `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name announced by `initialize`.
pub const SERVER_NAME: &str = "student-management-server";

/// Server version announced by `initialize`.
pub const SERVER_VERSION: &str = "1.0.0";

/// Configuration for the roster server.
///
/// Every field is optional in the JSON file; missing fields take their
/// default value, so an empty object `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Name reported in `serverInfo`.
    pub server_name: String,
    /// Version reported in `serverInfo`.
    pub server_version: String,
    /// Protocol revision reported by `initialize`.
    pub protocol_version: String,
    /// Path to a JSON roster file. The built-in roster is used when unset.
    pub roster_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_name: SERVER_NAME.to_string(),
            server_version: SERVER_VERSION.to_string(),
            protocol_version: PROTOCOL_VERSION.to_string(),
            roster_path: None,
        }
    }
}

/// Loads the configuration.
///
/// With no path, returns the default configuration. With a path, the file
/// must exist and contain a JSON object.
pub fn load_config(config_path: Option<&Path>) -> Result<ServerConfig> {
    let Some(config_path) = config_path else {
        return Ok(ServerConfig::default());
    };

    let contents = fs::read_to_string(config_path).map_err(|e| RosterError::Config {
        message: format!(
            "failed to read config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    let config: ServerConfig =
        serde_json::from_str(&contents).map_err(|e| RosterError::Config {
            message: format!(
                "failed to parse config file '{}': {}",
                config_path.display(),
                e
            ),
        })?;

    Ok(config)
}

/// Builds the roster the server should serve.
///
/// A roster path given on the command line takes precedence over
/// `roster_path` from the configuration. With neither, the built-in seed
/// roster is used.
pub fn resolve_roster(cli_path: Option<&Path>, config: &ServerConfig) -> Result<Roster> {
    let roster_path = cli_path
        .map(Path::to_path_buf)
        .or_else(|| config.roster_path.as_ref().map(PathBuf::from));

    match roster_path {
        Some(path) => Roster::load(&path),
        None => Ok(Roster::seed()),
    }
}
