use std::fs;

use roster_mcp::config::*;
use roster_mcp::errors::RosterError;
use roster_mcp::roster::Roster;
use roster_mcp::types::Student;
use tempfile::TempDir;

#[test]
fn test_default_config_identity() {
    let config = ServerConfig::default();
    assert_eq!(config.server_name, "student-management-server");
    assert_eq!(config.server_version, "1.0.0");
    assert_eq!(config.protocol_version, "2024-11-05");
    assert!(config.roster_path.is_none());
}

#[test]
fn test_load_without_path_gives_default() {
    assert_eq!(load_config(None).unwrap(), ServerConfig::default());
}

#[test]
fn test_load_partial_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"server_name": "roster", "roster_path": "/tmp/r.json"}"#).unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.server_name, "roster");
    assert_eq!(config.roster_path.as_deref(), Some("/tmp/r.json"));
    assert_eq!(config.server_version, SERVER_VERSION);
    assert_eq!(config.protocol_version, PROTOCOL_VERSION);
}

#[test]
fn test_load_empty_object() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{}").unwrap();
    assert_eq!(load_config(Some(path.as_path())).unwrap(), ServerConfig::default());
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let result = load_config(Some(dir.path().join("missing.json").as_path()));
    assert!(matches!(result, Err(RosterError::Config { .. })));
}

#[test]
fn test_load_invalid_json_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "not json").unwrap();
    let err = load_config(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("failed to parse config file"));
}

#[test]
fn test_config_serde_roundtrip() {
    let config = ServerConfig {
        roster_path: Some("students.json".to_string()),
        ..ServerConfig::default()
    };
    let json = serde_json::to_string_pretty(&config).unwrap();
    let deserialized: ServerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, deserialized);
}

fn write_roster(dir: &TempDir, file: &str, id: &str) -> std::path::PathBuf {
    let path = dir.path().join(file);
    let students = vec![Student::new(id, "测试", 20, "大一", "Q班")];
    fs::write(&path, serde_json::to_string(&students).unwrap()).unwrap();
    path
}

#[test]
fn test_resolve_roster_cli_path_wins() {
    let dir = TempDir::new().unwrap();
    let cli_path = write_roster(&dir, "cli.json", "from-cli");
    let config = ServerConfig {
        roster_path: Some(write_roster(&dir, "config.json", "from-config").display().to_string()),
        ..ServerConfig::default()
    };

    let roster = resolve_roster(Some(cli_path.as_path()), &config).unwrap();
    assert_eq!(roster.len(), 1);
    assert!(roster.find("from-cli").is_some());
}

#[test]
fn test_resolve_roster_from_config_path() {
    let dir = TempDir::new().unwrap();
    let config = ServerConfig {
        roster_path: Some(write_roster(&dir, "config.json", "from-config").display().to_string()),
        ..ServerConfig::default()
    };

    let roster = resolve_roster(None, &config).unwrap();
    assert!(roster.find("from-config").is_some());
}

#[test]
fn test_resolve_roster_defaults_to_seed() {
    let roster = resolve_roster(None, &ServerConfig::default()).unwrap();
    assert_eq!(roster, Roster::seed());
}

#[test]
fn test_resolve_roster_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let result = resolve_roster(Some(missing.as_path()), &ServerConfig::default());
    assert!(matches!(result, Err(RosterError::Roster { .. })));
}
