//! Configuration for a verification run
//!
//! A `VerifyConfig` is loaded once (TOML file or built-in defaults), then
//! passed by reference everywhere — never global, never mutated after load.

use crate::error::{Error, Result};
use crate::types::{ContentRule, FileRequirement};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Complete configuration for one verification run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Credential source configuration
    pub env: EnvConfig,
    /// Hosting API parameters
    pub api: ApiConfig,
    /// Target repository and branches
    pub target: TargetConfig,
    /// Files that must exist with required content
    pub files: Vec<FileRequirement>,
    /// Release pull-request expectations
    pub pr: PrConfig,
    /// Report output and console framing
    pub output: OutputConfig,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            env: EnvConfig::default(),
            api: ApiConfig::default(),
            target: TargetConfig::default(),
            files: default_file_requirements(),
            pr: PrConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl VerifyConfig {
    /// Load configuration from a TOML file, or the built-in defaults when
    /// `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

        let cfg = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

        Ok(cfg)
    }
}

/// Where credentials come from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Env file loaded before reading variables, when it exists
    pub env_file: PathBuf,
    /// Environment variable holding the API token
    pub token_var: String,
    /// Environment variable holding the organization name
    pub org_var: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(".release_env"),
            token_var: "RELCHECK_GITHUB_TOKEN".to_string(),
            org_var: "RELCHECK_GITHUB_ORG".to_string(),
        }
    }
}

/// Hosting API parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API base URL
    pub base_url: String,
    /// Accept header media type
    pub accept: String,
    /// Status code treated as success
    pub success_status: u16,
    /// Status code treated as "resource does not exist"
    pub not_found_status: u16,
    /// Page size for paginated listings
    pub per_page: u32,
    /// Parent count a squash-merge commit is expected to have
    pub expected_parent_count: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            accept: "application/vnd.github.v3+json".to_string(),
            success_status: 200,
            not_found_status: 404,
            per_page: 100,
            expected_parent_count: 1,
            timeout_secs: 15,
        }
    }
}

/// The repository and branches under verification
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Repository name within the organization
    pub repo: String,
    /// Branch the release was cut on
    pub release_branch: String,
    /// Branch the release PR must merge into
    pub base_branch: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            repo: "my-project".to_string(),
            release_branch: "main".to_string(),
            base_branch: "main".to_string(),
        }
    }
}

/// Release pull-request expectations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrConfig {
    /// Substring the PR title must contain (case-insensitive)
    pub title_keyword: String,
    /// State filter for the PR listing
    pub state: String,
    /// Merge-method label the classification must equal
    pub required_merge_method: String,
}

impl Default for PrConfig {
    fn default() -> Self {
        Self {
            title_keyword: "Release v1.1.0".to_string(),
            state: "closed".to_string(),
            required_merge_method: "Squash and Merge".to_string(),
        }
    }
}

/// Report output and console framing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the report is written to (created if missing)
    pub dir: PathBuf,
    /// Report filename within the output directory
    pub report_file: String,
    /// Length of the console separator line
    pub separator_length: usize,
    /// Banner printed above the echoed report on PASS
    pub success_message: String,
    /// Process exit code on overall pass
    pub success_exit_code: i32,
    /// Process exit code on overall fail
    pub failure_exit_code: i32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("release_verification"),
            report_file: "verification_report.txt".to_string(),
            separator_length: 60,
            success_message: "🎉 All release verification steps passed!".to_string(),
            success_exit_code: 0,
            failure_exit_code: 1,
        }
    }
}

/// The shipped requirement set: release artifacts that must land on `main`.
fn default_file_requirements() -> Vec<FileRequirement> {
    vec![
        FileRequirement {
            name: "encoding module".to_string(),
            path: "src/encoding.rs".to_string(),
            branch: "main".to_string(),
            min_size: 500,
            rule: ContentRule::ExactOne(r#"FormattingToken::MetaSep => "<|meta_sep|>""#.to_string()),
        },
        FileRequirement {
            name: "token registry".to_string(),
            path: "src/registry.rs".to_string(),
            branch: "main".to_string(),
            min_size: 500,
            rule: ContentRule::AllOf(vec![
                r#"(FormattingToken::MetaSep, "<|meta_sep|>")"#.to_string(),
                r#"(FormattingToken::MetaEnd, "<|meta_end|>")"#.to_string(),
            ]),
        },
        FileRequirement {
            name: "crate manifest".to_string(),
            path: "Cargo.toml".to_string(),
            branch: "main".to_string(),
            min_size: 200,
            rule: ContentRule::ExactOne(r#"version = "1.1.0""#.to_string()),
        },
        FileRequirement {
            name: "changelog".to_string(),
            path: "CHANGELOG.md".to_string(),
            branch: "main".to_string(),
            min_size: 300,
            rule: ContentRule::Keywords(vec![
                "## [1.1.0] - 2025-08-07".to_string(),
                "MetaSep token mapping bug".to_string(),
                "Fixed MetaSep token".to_string(),
            ]),
        },
    ]
}
