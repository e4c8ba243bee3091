//! Core types for relcheck

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A branch on the target repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Branch name
    pub name: String,
    /// Commit SHA the branch points at
    pub commit_sha: String,
}

/// A pull request as returned by the hosting API.
///
/// Used for both listing entries and single-PR detail; the fields the
/// pipeline consumes are present on both wire shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// When the PR was merged (`None` if never merged)
    pub merged_at: Option<DateTime<Utc>>,
    /// Base branch the PR targets
    pub base_ref: String,
    /// SHA of the merge commit, once merged
    pub merge_commit_sha: Option<String>,
}

/// A commit fetched for merge-method classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Commit SHA
    pub sha: String,
    /// Number of direct parent commits
    pub parent_count: usize,
    /// Full commit message
    pub message: String,
}

/// Merge-method classification for a release PR's merge commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMethod {
    /// Single-parent merge commit whose message references the PR number
    Squash,
    /// Any other merge shape (merge commit, rebase, unrelated message)
    Other,
    /// The PR or its merge commit could not be resolved
    NotFound,
}

impl MergeMethod {
    /// Report label for this classification
    pub const fn label(self) -> &'static str {
        match self {
            Self::Squash => "Squash and Merge",
            Self::Other => "OTHER",
            Self::NotFound => "not found",
        }
    }
}

impl std::fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Content predicate for a file requirement.
///
/// The three variants are semantically identical — every listed string must
/// appear verbatim in the decoded file text. They stay distinct because the
/// input format distinguishes a single required string (`required_content`)
/// from a list (`required_contents`) from a keyword list
/// (`required_keywords`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRule {
    /// Exactly one required substring
    ExactOne(String),
    /// A list of required substrings
    AllOf(Vec<String>),
    /// A list of required keywords
    Keywords(Vec<String>),
}

impl ContentRule {
    /// The required strings for this rule
    pub fn required(&self) -> &[String] {
        match self {
            Self::ExactOne(one) => std::slice::from_ref(one),
            Self::AllOf(list) | Self::Keywords(list) => list,
        }
    }

    /// Required strings not present verbatim in `text`
    pub fn missing_in(&self, text: &str) -> Vec<String> {
        self.required()
            .iter()
            .filter(|item| !text.contains(item.as_str()))
            .cloned()
            .collect()
    }
}

/// A file that must exist with a minimum size and required content.
///
/// Deserialization resolves the content predicate from exactly one of the
/// input keys `required_content`, `required_contents`, or
/// `required_keywords`; zero or multiple keys is a configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawFileRequirement")]
pub struct FileRequirement {
    /// Display name for logs
    pub name: String,
    /// Path within the repository
    pub path: String,
    /// Branch the file is checked on
    pub branch: String,
    /// Minimum character count of the decoded content
    pub min_size: usize,
    /// Content predicate
    pub rule: ContentRule,
}

/// Wire shape of a file requirement before predicate resolution
#[derive(Debug, Clone, Deserialize)]
struct RawFileRequirement {
    name: String,
    path: String,
    branch: String,
    min_size: usize,
    #[serde(default)]
    required_content: Option<String>,
    #[serde(default)]
    required_contents: Option<Vec<String>>,
    #[serde(default)]
    required_keywords: Option<Vec<String>>,
}

impl TryFrom<RawFileRequirement> for FileRequirement {
    type Error = String;

    fn try_from(raw: RawFileRequirement) -> std::result::Result<Self, String> {
        let rule = match (
            raw.required_content,
            raw.required_contents,
            raw.required_keywords,
        ) {
            (Some(one), None, None) => ContentRule::ExactOne(one),
            (None, Some(list), None) => ContentRule::AllOf(list),
            (None, None, Some(list)) => ContentRule::Keywords(list),
            (None, None, None) => {
                return Err(format!("file requirement '{}' has no content rule", raw.path));
            }
            _ => {
                return Err(format!(
                    "file requirement '{}' has more than one content rule",
                    raw.path
                ));
            }
        };

        Ok(Self {
            name: raw.name,
            path: raw.path,
            branch: raw.branch,
            min_size: raw.min_size,
            rule,
        })
    }
}
