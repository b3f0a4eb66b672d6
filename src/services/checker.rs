use super::process::CommandRunner;
use camino::{Utf8Path, Utf8PathBuf};

/// Outcome of one standards check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Failed,
}

/// Runs the external coding-standards checker on single files.
///
/// One subprocess per file, strictly sequential. A failing or even unrunnable
/// check is converted into [`CheckStatus::Failed`] rather than propagated, so
/// one bad file never aborts the rest of the run.
#[derive(Debug, Clone)]
pub struct StandardsChecker {
    executable: Utf8PathBuf,
    standard_arg: String,
}

impl StandardsChecker {
    /// # Arguments
    /// * `executable` - Resolved path to the checker (e.g. phpcs)
    /// * `standard` - Coding standard identifier passed as `--standard=<name>`
    pub fn new<P: AsRef<Utf8Path>>(executable: P, standard: &str) -> Self {
        Self {
            executable: executable.as_ref().to_path_buf(),
            standard_arg: format!("--standard={standard}"),
        }
    }

    /// Check one file against the configured standard.
    pub async fn check_file<R: CommandRunner>(&self, path: &Utf8Path, runner: &R) -> CheckStatus {
        let result = runner
            .run(
                self.executable.as_str(),
                &[self.standard_arg.as_str(), path.as_str()],
            )
            .await;

        match result {
            Ok(output) if output.success() => {
                tracing::debug!("Standards check passed: {}", path);
                CheckStatus::Passed
            }
            Ok(output) => {
                tracing::info!(
                    "Standards check failed for {} (exit code {})",
                    path,
                    output.exit_code
                );
                CheckStatus::Failed
            }
            Err(err) => {
                tracing::warn!("Standards checker did not run for {}: {:#}", path, err);
                CheckStatus::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::process::ProcessOutput;
    use anyhow::{Result, anyhow};

    struct CannedChecker {
        exit_code: Option<i32>,
    }

    impl CommandRunner for CannedChecker {
        async fn run(&self, _program: &str, args: &[&str]) -> Result<ProcessOutput> {
            assert_eq!(args[0], "--standard=Drupal");
            match self.exit_code {
                Some(exit_code) => Ok(ProcessOutput {
                    exit_code,
                    stdout: String::new(),
                    stderr: String::new(),
                }),
                None => Err(anyhow!("spawn failed")),
            }
        }
    }

    #[tokio::test]
    async fn test_zero_exit_passes() {
        let checker = StandardsChecker::new("phpcs", "Drupal");
        let runner = CannedChecker { exit_code: Some(0) };

        let status = checker
            .check_file(Utf8Path::new("/repo/src/a.php"), &runner)
            .await;
        assert_eq!(status, CheckStatus::Passed);
    }

    #[tokio::test]
    async fn test_nonzero_exit_fails() {
        let checker = StandardsChecker::new("phpcs", "Drupal");
        let runner = CannedChecker { exit_code: Some(2) };

        let status = checker
            .check_file(Utf8Path::new("/repo/src/a.php"), &runner)
            .await;
        assert_eq!(status, CheckStatus::Failed);
    }

    #[tokio::test]
    async fn test_spawn_error_recorded_as_failure() {
        let checker = StandardsChecker::new("phpcs", "Drupal");
        let runner = CannedChecker { exit_code: None };

        let status = checker
            .check_file(Utf8Path::new("/repo/src/a.php"), &runner)
            .await;
        assert_eq!(status, CheckStatus::Failed);
    }
}
