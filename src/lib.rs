// lintgate - Coding-standards gate for files changed in a PR
//
// This is the library crate containing the core gate logic and data structures.
// The binary crate (main.rs) provides the CLI entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigManager};
pub use models::{GateReport, ScriptVariables};
pub use pipeline::{GateContext, run_gate};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
