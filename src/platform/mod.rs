//! Hosting API access
//!
//! A thin read-only client behind a service trait so checks can run against
//! fakes in tests.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{Branch, CommitRecord, PullRequestRecord};
use async_trait::async_trait;

/// Read-only lookups against the hosting API.
///
/// `Ok(None)` means the resource does not exist (the API's not-found
/// status); `Err` is a transport or protocol failure. Callers decide how to
/// fold errors into check outcomes — the pipeline logs them and treats them
/// as negative results.
#[async_trait]
pub trait HostingService: Send + Sync {
    /// Look up a branch by name
    async fn get_branch(&self, name: &str) -> Result<Option<Branch>>;

    /// Fetch decoded file content at a path on a branch
    async fn get_file_content(&self, path: &str, branch: &str) -> Result<Option<String>>;

    /// List pull requests filtered server-side by state and base branch
    async fn list_pull_requests(
        &self,
        state: &str,
        base: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<PullRequestRecord>>;

    /// Fetch a single pull request by number
    async fn get_pull_request(&self, number: u64) -> Result<Option<PullRequestRecord>>;

    /// Fetch a single commit by SHA
    async fn get_commit(&self, sha: &str) -> Result<Option<CommitRecord>>;
}
