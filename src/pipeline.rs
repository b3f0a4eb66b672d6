use crate::config::ConfigManager;
use crate::models::GateReport;
use crate::services::{
    ChangeResolver, CheckStatus, CommandRunner, MissingExecutable, PathClass, PathFilter,
    StandardsChecker, find_executable,
};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};

/// Reference branch the diff is taken against. The CI tooling is expected to
/// have fetched it in an earlier build step.
pub const DEFAULT_BASE_REF: &str = "origin/develop";

/// Comparison endpoint for the diff.
pub const DEFAULT_HEAD_REF: &str = "HEAD";

/// Repository-relative location of the script variables file.
pub const DEFAULT_VARIABLES_PATH: &str = ".circleci/script_variables.yml";

/// Repository-vendored checker binary.
pub const DEFAULT_CHECKER_COMMAND: &str = "vendor/bin/phpcs";

/// Coding standard passed to the checker.
pub const DEFAULT_CHECKER_STANDARD: &str = "Drupal";

const GIT_COMMAND: &str = "git";

/// Everything the pipeline reads from the outside world, threaded explicitly.
///
/// Holding the working directory, search path, and CI branch here (instead of
/// reading them ad hoc inside components) keeps the whole run reproducible in
/// tests without process-level mocking.
#[derive(Debug, Clone)]
pub struct GateContext {
    /// Repository root; all relative paths resolve against it.
    pub repo_root: Utf8PathBuf,
    /// Variables file, relative to the repo root.
    pub variables_path: Utf8PathBuf,
    pub base_ref: String,
    pub head_ref: String,
    /// Checker command; a bare name is searched on `search_path`, a name with
    /// a separator is resolved against the repo root.
    pub checker_command: String,
    pub checker_standard: String,
    /// Contents of `PATH` for the executable probe.
    pub search_path: String,
    /// CI-provided branch name, informational only.
    pub ci_branch: Option<String>,
}

impl GateContext {
    /// Build a context from the process environment, rooted at `repo_root`.
    pub fn from_environment<P: AsRef<Utf8Path>>(repo_root: P) -> Self {
        Self {
            repo_root: repo_root.as_ref().to_path_buf(),
            variables_path: Utf8PathBuf::from(DEFAULT_VARIABLES_PATH),
            base_ref: DEFAULT_BASE_REF.to_string(),
            head_ref: DEFAULT_HEAD_REF.to_string(),
            checker_command: DEFAULT_CHECKER_COMMAND.to_string(),
            checker_standard: DEFAULT_CHECKER_STANDARD.to_string(),
            search_path: std::env::var("PATH").unwrap_or_default(),
            ci_branch: std::env::var("CIRCLE_BRANCH").ok(),
        }
    }
}

/// Run the gate: load config, probe dependencies, diff, filter, check.
///
/// Linear, no retries. Fatal errors (missing config, missing key, bad
/// pattern, missing executable, failed diff) abort with `Err`; a file failing
/// the standards check is recorded in the report and the run continues.
pub async fn run_gate<R: CommandRunner>(ctx: &GateContext, runner: &R) -> Result<GateReport> {
    let manager = ConfigManager::new(ctx.repo_root.join(&ctx.variables_path));
    let variables = manager.load_script_variables()?;

    tracing::info!("Build starting");
    if let Some(branch) = &ctx.ci_branch {
        tracing::info!("CI branch: {}", branch);
    }

    let filter = PathFilter::new(variables.directory_patterns())?;

    // Probe required tools before touching any file.
    let git = find_executable(GIT_COMMAND, &ctx.search_path, &ctx.repo_root)
        .ok_or_else(|| MissingExecutable(GIT_COMMAND.to_string()))?;
    let checker_path = find_executable(&ctx.checker_command, &ctx.search_path, &ctx.repo_root)
        .ok_or_else(|| MissingExecutable(ctx.checker_command.clone()))?;

    let resolver = ChangeResolver::new(&ctx.base_ref, &ctx.head_ref);
    let changed = resolver.changed_files(&git, runner).await?;

    let checker = StandardsChecker::new(&checker_path, &ctx.checker_standard);
    let mut report = GateReport::new();

    for path in &changed {
        let on_disk = ctx.repo_root.join(path);
        if !on_disk.is_file() {
            // Deleted (or otherwise gone) files show up in the diff too.
            continue;
        }

        match filter.classify(path) {
            PathClass::Skipped => report.record_skipped(path),
            PathClass::ExtensionMismatch => {
                tracing::debug!("No recognized source extension, not checked: {}", path);
            }
            PathClass::Included => {
                let absolute = on_disk
                    .canonicalize_utf8()
                    .with_context(|| format!("Failed to resolve path: {on_disk}"))?;
                report.record_visited(absolute.as_str());

                match checker.check_file(&absolute, runner).await {
                    CheckStatus::Passed => report.record_passed(absolute.as_str()),
                    CheckStatus::Failed => report.record_failed(absolute.as_str()),
                }
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults() {
        let ctx = GateContext::from_environment("/repo");
        assert_eq!(ctx.base_ref, "origin/develop");
        assert_eq!(ctx.head_ref, "HEAD");
        assert_eq!(ctx.variables_path, ".circleci/script_variables.yml");
        assert_eq!(ctx.checker_standard, "Drupal");
    }
}
