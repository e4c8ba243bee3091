//! Verification orchestrator
//!
//! Runs the ordered check sequence and accumulates a single outcome per
//! run. Missing credentials or a missing branch fail the run up front; from
//! the branch check onward every step runs to completion so the report
//! lists all failures, not just the first.

mod report;

pub use report::{render_report, write_report};

use crate::auth;
use crate::checks::{
    branch_exists, check_required_files, classify_merge_method, find_merged_pr,
    verify_merge_target,
};
use crate::config::VerifyConfig;
use crate::error::Result;
use crate::platform::{GitHubService, HostingService};
use crate::types::{MergeMethod, PullRequestRecord};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::{error, info};

/// Accumulated result of one verification run.
///
/// Built incrementally by the orchestrator; read-only once the report is
/// rendered. Lives for exactly one run.
#[derive(Debug, Clone)]
pub struct VerificationOutcome {
    /// Organization the run targeted ("UNKNOWN" when credentials were absent)
    pub organization: String,
    /// Whether both configured branches exist
    pub branches_ok: bool,
    /// Number of configured file requirements
    pub files_total: usize,
    /// Failing file paths, in evaluation order
    pub failed_files: Vec<String>,
    /// The merged release PR, when found
    pub pull_request: Option<PullRequestRecord>,
    /// Merge-method classification for the found PR
    pub merge_method: MergeMethod,
    /// Parent count of the merge commit
    pub parent_count: usize,
    /// Overall verdict
    pub passed: bool,
    /// When the run finished (UTC)
    pub finished_at: DateTime<Utc>,
}

impl VerificationOutcome {
    /// Outcome for a run that failed before any resource checks ran
    pub fn failed_before_checks(organization: &str) -> Self {
        Self {
            organization: organization.to_string(),
            branches_ok: false,
            files_total: 0,
            failed_files: Vec::new(),
            pull_request: None,
            merge_method: MergeMethod::NotFound,
            parent_count: 0,
            passed: false,
            finished_at: Utc::now(),
        }
    }

    /// Number of file requirements that did not fail
    pub fn files_passed(&self) -> usize {
        self.files_total - self.failed_files.len()
    }
}

/// Result of a full pipeline run, for the caller to present
#[derive(Debug)]
pub struct RunReport {
    /// The accumulated outcome
    pub outcome: VerificationOutcome,
    /// The rendered report lines
    pub lines: Vec<String>,
    /// Where the report was written
    pub report_path: PathBuf,
}

/// Run branch, file, and PR checks against a hosting service.
///
/// Assumes credentials are already resolved. A missing branch
/// short-circuits the run; file and PR checks always run to completion.
pub async fn verify(
    cfg: &VerifyConfig,
    organization: &str,
    service: &dyn HostingService,
) -> VerificationOutcome {
    let mut outcome = VerificationOutcome::failed_before_checks(organization);

    info!(step = "2/6", "checking branch existence");
    for branch in [&cfg.target.release_branch, &cfg.target.base_branch] {
        if !branch_exists(service, branch).await {
            error!(branch = %branch, "required branch does not exist");
            outcome.finished_at = Utc::now();
            return outcome;
        }
    }
    outcome.branches_ok = true;
    info!(
        release = %cfg.target.release_branch,
        base = %cfg.target.base_branch,
        "branches verified"
    );

    info!(step = "3/6", count = cfg.files.len(), "checking required files");
    let files = check_required_files(service, &cfg.files).await;
    outcome.files_total = files.total;
    outcome.failed_files.clone_from(&files.failed_paths);

    info!(step = "4/6", keyword = %cfg.pr.title_keyword, "searching for merged release PR");
    let pr = find_merged_pr(
        service,
        &cfg.pr.title_keyword,
        &cfg.target.base_branch,
        &cfg.pr.state,
        cfg.api.per_page,
    )
    .await;

    if let Some(ref found) = pr {
        info!(pr_number = found.number, title = %found.title, "release PR found");

        info!(step = "5/6", "verifying merge target branch");
        verify_merge_target(service, found.number, &cfg.target.base_branch).await;

        info!(step = "6/6", "classifying merge method");
        let (method, parents) =
            classify_merge_method(service, found.number, cfg.api.expected_parent_count).await;
        outcome.merge_method = method;
        outcome.parent_count = parents;
    } else {
        error!(keyword = %cfg.pr.title_keyword, "no merged release PR found");
    }

    outcome.passed = files.all_passed()
        && pr.is_some()
        && outcome.merge_method.label() == cfg.pr.required_merge_method;
    outcome.pull_request = pr;
    outcome.finished_at = Utc::now();
    outcome
}

/// Run the full verification pipeline: credentials, checks, report.
///
/// Always writes the report, even when credentials or branches are missing.
pub async fn run(cfg: &VerifyConfig) -> Result<RunReport> {
    info!(step = "1/6", "checking environment configuration");
    let outcome = match auth::resolve_credentials(&cfg.env) {
        Ok(credentials) => {
            info!(organization = %credentials.organization, "environment ready");

            let service = GitHubService::new(
                &credentials.token,
                credentials.organization.clone(),
                cfg.target.repo.clone(),
                &cfg.api,
            )?;

            verify(cfg, &credentials.organization, &service).await
        }
        Err(e) => {
            error!(error = %e, "environment check failed");
            VerificationOutcome::failed_before_checks("UNKNOWN")
        }
    };

    let lines = render_report(cfg, &outcome);
    let report_path = write_report(&cfg.output, &lines)?;

    Ok(RunReport {
        outcome,
        lines,
        report_path,
    })
}
