//! File requirement checks
//!
//! Every configured requirement is evaluated; failures accumulate so the
//! report can list all failing paths, not just the first.

use crate::platform::HostingService;
use crate::types::FileRequirement;
use tracing::{info, warn};

/// OS artifact filenames skipped if they end up in a requirement list
const SKIPPED_ARTIFACTS: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Why a single file requirement failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileCheckFailure {
    /// File is absent or could not be fetched/decoded
    Unreadable,
    /// Decoded content is shorter than the required minimum
    TooSmall {
        /// Observed character count
        actual: usize,
        /// Required minimum character count
        min: usize,
    },
    /// One or more required strings are absent from the content
    MissingContent {
        /// The required strings that were not found
        missing: Vec<String>,
    },
}

impl std::fmt::Display for FileCheckFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable => write!(f, "unreadable"),
            Self::TooSmall { actual, min } => write!(f, "too small ({actual} < {min})"),
            Self::MissingContent { missing } => {
                write!(f, "missing content: {}", missing.join(", "))
            }
        }
    }
}

/// Aggregate result of evaluating all file requirements
#[derive(Debug, Clone, Default)]
pub struct FileCheckReport {
    /// Number of configured requirements
    pub total: usize,
    /// Paths that failed, in evaluation order
    pub failed_paths: Vec<String>,
}

impl FileCheckReport {
    /// Whether every requirement passed
    pub fn all_passed(&self) -> bool {
        self.failed_paths.is_empty()
    }

    /// Number of requirements that did not fail
    pub fn passed_count(&self) -> usize {
        self.total - self.failed_paths.len()
    }
}

/// Evaluate one file requirement.
///
/// All three conditions must hold: the file is readable, its decoded
/// content meets the minimum character count, and every required string
/// appears verbatim.
pub async fn check_file(
    service: &dyn HostingService,
    requirement: &FileRequirement,
) -> Result<(), FileCheckFailure> {
    let content = match service
        .get_file_content(&requirement.path, &requirement.branch)
        .await
    {
        Ok(Some(content)) => content,
        Ok(None) => return Err(FileCheckFailure::Unreadable),
        Err(e) => {
            warn!(path = %requirement.path, error = %e, "file lookup failed");
            return Err(FileCheckFailure::Unreadable);
        }
    };

    // Character count of the decoded text, not raw bytes
    let length = content.chars().count();
    if length < requirement.min_size {
        return Err(FileCheckFailure::TooSmall {
            actual: length,
            min: requirement.min_size,
        });
    }

    let missing = requirement.rule.missing_in(&content);
    if !missing.is_empty() {
        return Err(FileCheckFailure::MissingContent { missing });
    }

    Ok(())
}

/// Evaluate all file requirements, accumulating failures.
///
/// Runs unconditionally over the whole set; a failing requirement never
/// stops later ones. Duplicated paths may appear twice in the failed list
/// if configured twice.
pub async fn check_required_files(
    service: &dyn HostingService,
    requirements: &[FileRequirement],
) -> FileCheckReport {
    let mut report = FileCheckReport {
        total: requirements.len(),
        failed_paths: Vec::new(),
    };

    for requirement in requirements {
        if SKIPPED_ARTIFACTS.contains(&requirement.path.as_str()) {
            info!(path = %requirement.path, "skipping OS artifact path");
            continue;
        }

        match check_file(service, requirement).await {
            Ok(()) => info!(name = %requirement.name, path = %requirement.path, "file requirement passed"),
            Err(failure) => {
                warn!(name = %requirement.name, path = %requirement.path, %failure, "file requirement failed");
                report.failed_paths.push(requirement.path.clone());
            }
        }
    }

    report
}
