//! Mock hosting service for testing
//!
//! Manually implements `HostingService` with configurable responses, call
//! tracking, and error injection. Not all helpers are used by every test
//! binary.

#![allow(dead_code)]

use async_trait::async_trait;
use relcheck::error::{Error, Result};
use relcheck::platform::HostingService;
use relcheck::types::{Branch, CommitRecord, PullRequestRecord};
use std::collections::HashMap;
use std::sync::Mutex;

/// Call record for `list_pull_requests`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPullsCall {
    pub state: String,
    pub base: String,
    pub page: u32,
    pub per_page: u32,
}

/// Configurable in-memory hosting service
#[derive(Default)]
pub struct MockHostingService {
    branches: Mutex<HashMap<String, Branch>>,
    files: Mutex<HashMap<(String, String), String>>,
    pr_pages: Mutex<Vec<Vec<PullRequestRecord>>>,
    pr_details: Mutex<HashMap<u64, PullRequestRecord>>,
    commits: Mutex<HashMap<String, CommitRecord>>,
    // Call tracking
    branch_calls: Mutex<Vec<String>>,
    file_calls: Mutex<Vec<(String, String)>>,
    list_pulls_calls: Mutex<Vec<ListPullsCall>>,
    get_pr_calls: Mutex<Vec<u64>>,
    get_commit_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_branch: Mutex<Option<String>>,
    error_on_file: Mutex<Option<String>>,
    error_on_list_pulls: Mutex<Option<String>>,
    error_on_get_pr: Mutex<Option<String>>,
    error_on_get_commit: Mutex<Option<String>>,
}

impl MockHostingService {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    // === Response configuration ===

    pub fn insert_branch(&self, branch: Branch) {
        self.branches
            .lock()
            .unwrap()
            .insert(branch.name.clone(), branch);
    }

    pub fn insert_file(&self, path: &str, branch: &str, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert((path.to_string(), branch.to_string()), content.to_string());
    }

    /// Append a page to the PR listing (pages are served in push order)
    pub fn push_pr_page(&self, page: Vec<PullRequestRecord>) {
        self.pr_pages.lock().unwrap().push(page);
    }

    pub fn insert_pr(&self, pr: PullRequestRecord) {
        self.pr_details.lock().unwrap().insert(pr.number, pr);
    }

    pub fn insert_commit(&self, commit: CommitRecord) {
        self.commits.lock().unwrap().insert(commit.sha.clone(), commit);
    }

    // === Error injection ===

    pub fn fail_branch_lookup(&self, msg: &str) {
        *self.error_on_branch.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_file_lookup(&self, msg: &str) {
        *self.error_on_file.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_list_pulls(&self, msg: &str) {
        *self.error_on_list_pulls.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_get_pr(&self, msg: &str) {
        *self.error_on_get_pr.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_get_commit(&self, msg: &str) {
        *self.error_on_get_commit.lock().unwrap() = Some(msg.to_string());
    }

    // === Call inspection ===

    pub fn branch_calls(&self) -> Vec<String> {
        self.branch_calls.lock().unwrap().clone()
    }

    pub fn file_calls(&self) -> Vec<(String, String)> {
        self.file_calls.lock().unwrap().clone()
    }

    pub fn list_pulls_calls(&self) -> Vec<ListPullsCall> {
        self.list_pulls_calls.lock().unwrap().clone()
    }

    pub fn get_pr_calls(&self) -> Vec<u64> {
        self.get_pr_calls.lock().unwrap().clone()
    }

    pub fn get_commit_calls(&self) -> Vec<String> {
        self.get_commit_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostingService for MockHostingService {
    async fn get_branch(&self, name: &str) -> Result<Option<Branch>> {
        self.branch_calls.lock().unwrap().push(name.to_string());
        if let Some(msg) = self.error_on_branch.lock().unwrap().clone() {
            return Err(Error::Api(msg));
        }
        Ok(self.branches.lock().unwrap().get(name).cloned())
    }

    async fn get_file_content(&self, path: &str, branch: &str) -> Result<Option<String>> {
        self.file_calls
            .lock()
            .unwrap()
            .push((path.to_string(), branch.to_string()));
        if let Some(msg) = self.error_on_file.lock().unwrap().clone() {
            return Err(Error::Api(msg));
        }
        Ok(self
            .files
            .lock()
            .unwrap()
            .get(&(path.to_string(), branch.to_string()))
            .cloned())
    }

    async fn list_pull_requests(
        &self,
        state: &str,
        base: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<PullRequestRecord>> {
        self.list_pulls_calls.lock().unwrap().push(ListPullsCall {
            state: state.to_string(),
            base: base.to_string(),
            page,
            per_page,
        });
        if let Some(msg) = self.error_on_list_pulls.lock().unwrap().clone() {
            return Err(Error::Api(msg));
        }
        let pages = self.pr_pages.lock().unwrap();
        Ok(pages.get((page - 1) as usize).cloned().unwrap_or_default())
    }

    async fn get_pull_request(&self, number: u64) -> Result<Option<PullRequestRecord>> {
        self.get_pr_calls.lock().unwrap().push(number);
        if let Some(msg) = self.error_on_get_pr.lock().unwrap().clone() {
            return Err(Error::Api(msg));
        }
        Ok(self.pr_details.lock().unwrap().get(&number).cloned())
    }

    async fn get_commit(&self, sha: &str) -> Result<Option<CommitRecord>> {
        self.get_commit_calls.lock().unwrap().push(sha.to_string());
        if let Some(msg) = self.error_on_get_commit.lock().unwrap().clone() {
            return Err(Error::Api(msg));
        }
        Ok(self.commits.lock().unwrap().get(sha).cloned())
    }
}
