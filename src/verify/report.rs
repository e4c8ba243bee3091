//! Report assembly and persistence
//!
//! The report is a fixed set of 7 lines, rendered the same way for every
//! outcome so it can be parsed as well as read.

use crate::config::{OutputConfig, VerifyConfig};
use crate::error::{Error, Result};
use crate::verify::VerificationOutcome;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Render the fixed 7-line report for an outcome.
pub fn render_report(cfg: &VerifyConfig, outcome: &VerificationOutcome) -> Vec<String> {
    let verdict = if outcome.passed { "PASS" } else { "FAIL" };

    let pr_line = outcome.pull_request.as_ref().map_or_else(
        || "release PR: not found".to_string(),
        |pr| {
            format!(
                "release PR: #{}  title: {}",
                pr.number,
                pr.title.replace('\n', " ")
            )
        },
    );

    let failed = if outcome.failed_files.is_empty() {
        "none".to_string()
    } else {
        outcome.failed_files.join(",")
    };

    vec![
        format!("verification result: {verdict}"),
        format!("repository: {}/{}", outcome.organization, cfg.target.repo),
        format!(
            "release branch: {}  base branch: {}",
            cfg.target.release_branch, cfg.target.base_branch
        ),
        pr_line,
        format!(
            "merge method: {}  parents: {}",
            outcome.merge_method, outcome.parent_count
        ),
        format!(
            "files checked: {}/{}  failed files: {}",
            outcome.files_passed(),
            outcome.files_total,
            failed
        ),
        format!(
            "timestamp: {}",
            outcome.finished_at.format("%Y-%m-%dT%H:%M:%SZ")
        ),
    ]
}

/// Write the report to the configured path, creating the directory first.
///
/// A single write after all checks complete; no partial states.
pub fn write_report(output: &OutputConfig, lines: &[String]) -> Result<PathBuf> {
    fs::create_dir_all(&output.dir)
        .map_err(|e| Error::Report(format!("failed to create {}: {e}", output.dir.display())))?;

    let path = output.dir.join(&output.report_file);
    fs::write(&path, lines.join("\n"))
        .map_err(|e| Error::Report(format!("failed to write {}: {e}", path.display())))?;

    info!(path = %path.display(), "report written");
    Ok(path)
}
