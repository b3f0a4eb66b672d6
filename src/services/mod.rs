//! Services module - the gate's collaborators, free of CLI concerns.
//!
//! # Components
//!
//! - [`process`]: the [`CommandRunner`] capability for spawning subprocesses,
//!   its tokio-backed [`SystemRunner`], and the `which`-style executable probe
//! - [`changes`]: [`ChangeResolver`], wrapping `git diff --name-only` against
//!   the reference branch
//! - [`filter`]: [`PathFilter`], the configured directory patterns plus the
//!   recognized-extension test
//! - [`checker`]: [`StandardsChecker`], one checker subprocess per visited
//!   file with per-file pass/fail conversion
//!
//! Everything here takes its inputs explicitly (no environment or cwd reads),
//! so the whole pipeline is testable with a fake [`CommandRunner`] and a
//! temporary directory.

pub mod changes;
pub mod checker;
pub mod filter;
pub mod process;

pub use changes::{ChangeError, ChangeResolver};
pub use checker::{CheckStatus, StandardsChecker};
pub use filter::{FilterError, PathClass, PathFilter};
pub use process::{CommandRunner, MissingExecutable, ProcessOutput, SystemRunner, find_executable};
