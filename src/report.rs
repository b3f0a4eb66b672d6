use crate::models::GateReport;
use std::io::Write;

/// Render the categorized file listings.
///
/// Section rules: nothing visited prints a single no-op line; the skipped
/// section only appears when something failed, as context for spotting a
/// wrongly excluded directory; passed and failed sections appear when
/// non-empty. Entry order within a section is insertion order, which nothing
/// downstream may rely on.
pub fn write_report<W: Write>(report: &GateReport, out: &mut W) -> std::io::Result<()> {
    if report.nothing_visited() {
        writeln!(out, "No checks required (no matching files changed).")?;
        return Ok(());
    }

    write_section(out, "visited", &report.visited)?;

    if report.has_failures() {
        write_section(out, "skipped", &report.skipped)?;
    }
    if !report.passed.is_empty() {
        write_section(out, "passed", &report.passed)?;
    }
    if report.has_failures() {
        write_section(out, "failed", &report.failed)?;
    }

    Ok(())
}

fn write_section<W: Write>(
    out: &mut W,
    label: &str,
    entries: &indexmap::IndexSet<String>,
) -> std::io::Result<()> {
    writeln!(out, "\n{} files {}:", entries.len(), label)?;
    for entry in entries {
        writeln!(out, "  - {entry}")?;
    }
    Ok(())
}

/// Print the report to stdout.
pub fn print_report(report: &GateReport) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    write_report(report, &mut stdout.lock())
}
