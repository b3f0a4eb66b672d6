use indexmap::IndexSet;

/// Result sets accumulated over one gate run.
///
/// All four sets hold absolute path strings except `skipped`, which keeps the
/// repository-relative form the diff reported (those files were never
/// resolved). A visited file ends up in exactly one of `passed`/`failed`;
/// `skipped` is disjoint from the other three by construction, since each
/// changed path is classified exactly once.
#[derive(Debug, Clone, Default)]
pub struct GateReport {
    pub visited: IndexSet<String>,
    pub skipped: IndexSet<String>,
    pub passed: IndexSet<String>,
    pub failed: IndexSet<String>,
}

impl GateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_visited(&mut self, path: &str) {
        self.visited.insert(path.to_string());
    }

    pub fn record_skipped(&mut self, path: &str) {
        self.skipped.insert(path.to_string());
    }

    pub fn record_passed(&mut self, path: &str) {
        self.passed.insert(path.to_string());
    }

    pub fn record_failed(&mut self, path: &str) {
        self.failed.insert(path.to_string());
    }

    /// True if at least one visited file failed the standards check.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// True if no file made it through the filters.
    pub fn nothing_visited(&self) -> bool {
        self.visited.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = GateReport::new();
        assert!(report.nothing_visited());
        assert!(!report.has_failures());
    }

    #[test]
    fn test_failure_detection() {
        let mut report = GateReport::new();
        report.record_visited("/repo/src/a.php");
        report.record_failed("/repo/src/a.php");

        assert!(report.has_failures());
        assert!(!report.nothing_visited());
    }

    #[test]
    fn test_sets_deduplicate() {
        let mut report = GateReport::new();
        report.record_visited("/repo/src/a.php");
        report.record_visited("/repo/src/a.php");

        assert_eq!(report.visited.len(), 1);
    }
}
