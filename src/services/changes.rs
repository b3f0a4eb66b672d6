use super::process::CommandRunner;
use anyhow::Result;
use camino::Utf8Path;
use thiserror::Error;

/// Errors from resolving the changed-file list.
#[derive(Error, Debug)]
pub enum ChangeError {
    #[error("git diff {base}..{head} failed with exit code {exit_code}: {stderr}")]
    DiffFailed {
        base: String,
        head: String,
        exit_code: i32,
        stderr: String,
    },
}

/// Resolves the list of files that differ from the reference branch.
///
/// Wraps `git diff --name-only <base> <head>`. The reference branch is
/// expected to have been fetched by the CI tooling in an earlier step; a
/// missing ref surfaces as a git failure, which is fatal for the run.
#[derive(Debug, Clone)]
pub struct ChangeResolver {
    base_ref: String,
    head_ref: String,
}

impl ChangeResolver {
    pub fn new(base_ref: impl Into<String>, head_ref: impl Into<String>) -> Self {
        Self {
            base_ref: base_ref.into(),
            head_ref: head_ref.into(),
        }
    }

    /// Return the changed paths in the order git reports them.
    ///
    /// Blank lines are dropped; paths are repository-relative.
    pub async fn changed_files<R: CommandRunner>(
        &self,
        git: &Utf8Path,
        runner: &R,
    ) -> Result<Vec<String>> {
        let output = runner
            .run(
                git.as_str(),
                &[
                    "diff",
                    "--name-only",
                    self.base_ref.as_str(),
                    self.head_ref.as_str(),
                ],
            )
            .await?;

        if !output.success() {
            return Err(ChangeError::DiffFailed {
                base: self.base_ref.clone(),
                head: self.head_ref.clone(),
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            }
            .into());
        }

        let files: Vec<String> = output
            .stdout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        tracing::info!(
            "{} files changed between {} and {}",
            files.len(),
            self.base_ref,
            self.head_ref
        );

        Ok(files)
    }
}
