//! Data models for the lintgate pipeline.
//!
//! - [`ScriptVariables`]: variables loaded from `.circleci/script_variables.yml`
//! - [`GateReport`]: the four result sets (visited, skipped, passed, failed)
//!   accumulated during a run and rendered by the reporter

pub mod config;
pub mod report;

pub use config::ScriptVariables;
pub use report::GateReport;
