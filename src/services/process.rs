use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tokio::process::Command;

/// Captured outcome of a finished subprocess.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// A required external tool could not be found on the search path.
#[derive(Error, Debug)]
#[error("Required executable '{0}' was not found")]
pub struct MissingExecutable(pub String);

/// Capability for running external commands.
///
/// The pipeline is generic over this trait so tests substitute a scripted
/// fake instead of spawning real subprocesses.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` with `args` to completion, capturing output.
    ///
    /// A non-zero exit from the child is not an `Err`; only failure to spawn
    /// or wait is. Callers decide what a non-zero exit means.
    async fn run(&self, program: &str, args: &[&str]) -> Result<ProcessOutput>;
}

/// [`CommandRunner`] backed by real child processes via tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<ProcessOutput> {
        tracing::debug!("Executing: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .with_context(|| format!("Failed to spawn process: {program}"))?;

        Ok(ProcessOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Locate an executable, mimicking the unix `which` command.
///
/// A program name containing a path separator is resolved against `base_dir`
/// and checked directly (covers repo-vendored tools like `vendor/bin/phpcs`).
/// A bare name is searched for in each `search_path` entry, with surrounding
/// quotes stripped from entries as `which` tolerates.
pub fn find_executable(
    program: &str,
    search_path: &str,
    base_dir: &Utf8Path,
) -> Option<Utf8PathBuf> {
    let candidate = Utf8Path::new(program);

    if program.contains('/') || program.contains(std::path::MAIN_SEPARATOR) {
        let resolved = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            base_dir.join(candidate)
        };
        return is_executable(&resolved).then_some(resolved);
    }

    for entry in std::env::split_paths(search_path) {
        let Ok(dir) = Utf8PathBuf::from_path_buf(entry) else {
            continue;
        };
        let dir = Utf8PathBuf::from(dir.as_str().trim_matches('"'));
        let candidate = dir.join(program);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }

    None
}

#[cfg(unix)]
fn is_executable(path: &Utf8Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.is_file()
        && std::fs::metadata(path)
            .map(|meta| meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Utf8Path) -> bool {
    path.is_file()
}
