pub mod config;
pub mod errors;
pub mod mcp;
pub mod roster;
pub mod types;
