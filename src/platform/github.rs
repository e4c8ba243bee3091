//! GitHub REST implementation of the hosting service

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::platform::HostingService;
use crate::types::{Branch, CommitRecord, PullRequestRecord};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// User agent sent with every request
const USER_AGENT: &str = "release-verification-tool";

/// GitHub service using reqwest.
///
/// One request per lookup — no retries, no backoff. A fixed timeout bounds
/// every call.
pub struct GitHubService {
    client: Client,
    token: String,
    base_url: String,
    accept: String,
    success_status: u16,
    not_found_status: u16,
    owner: String,
    repo: String,
}

/// Outcome of a raw lookup: decoded body, or a not-found response
enum Lookup {
    Found(serde_json::Value),
    Absent,
}

// Wire payloads

#[derive(Deserialize)]
struct BranchPayload {
    name: String,
    commit: CommitRefPayload,
}

#[derive(Deserialize)]
struct CommitRefPayload {
    sha: String,
}

#[derive(Deserialize)]
struct FileContentPayload {
    #[serde(default)]
    content: String,
}

#[derive(Deserialize)]
struct PullRequestPayload {
    number: u64,
    #[serde(default)]
    title: String,
    merged_at: Option<DateTime<Utc>>,
    base: BaseRefPayload,
    merge_commit_sha: Option<String>,
}

#[derive(Deserialize)]
struct BaseRefPayload {
    #[serde(rename = "ref")]
    ref_field: String,
}

#[derive(Deserialize)]
struct CommitPayload {
    sha: String,
    #[serde(default)]
    parents: Vec<serde_json::Value>,
    commit: CommitBodyPayload,
}

#[derive(Deserialize)]
struct CommitBodyPayload {
    #[serde(default)]
    message: String,
}

impl From<BranchPayload> for Branch {
    fn from(payload: BranchPayload) -> Self {
        Self {
            name: payload.name,
            commit_sha: payload.commit.sha,
        }
    }
}

impl From<PullRequestPayload> for PullRequestRecord {
    fn from(payload: PullRequestPayload) -> Self {
        Self {
            number: payload.number,
            title: payload.title,
            merged_at: payload.merged_at,
            base_ref: payload.base.ref_field,
            merge_commit_sha: payload.merge_commit_sha,
        }
    }
}

impl From<CommitPayload> for CommitRecord {
    fn from(payload: CommitPayload) -> Self {
        Self {
            sha: payload.sha,
            parent_count: payload.parents.len(),
            message: payload.commit.message,
        }
    }
}

impl GitHubService {
    /// Create a new GitHub service for one repository
    pub fn new(token: &str, owner: String, repo: String, api: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(api.timeout_secs))
            .build()
            .map_err(|e| Error::Api(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.to_string(),
            base_url: api.base_url.trim_end_matches('/').to_string(),
            accept: api.accept.clone(),
            success_status: api.success_status,
            not_found_status: api.not_found_status,
            owner,
            repo,
        })
    }

    /// Issue one GET against a repository endpoint. Single attempt.
    async fn get_json(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Lookup> {
        let url = format!(
            "{}/repos/{}/{}/{}",
            self.base_url, self.owner, self.repo, endpoint
        );

        let mut request = self
            .client
            .get(&url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", &self.accept);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Api(format!("{endpoint}: {e}")))?;

        let status = response.status().as_u16();
        if status == self.success_status {
            let body = response
                .json()
                .await
                .map_err(|e| Error::Api(format!("{endpoint}: failed to decode body: {e}")))?;
            Ok(Lookup::Found(body))
        } else if status == self.not_found_status {
            debug!(endpoint, "resource not found");
            Ok(Lookup::Absent)
        } else {
            Err(Error::Api(format!("{endpoint}: unexpected status {status}")))
        }
    }
}

/// Decode a typed payload out of a JSON body
fn parse<T: serde::de::DeserializeOwned>(endpoint: &str, body: serde_json::Value) -> Result<T> {
    serde_json::from_value(body)
        .map_err(|e| Error::Api(format!("{endpoint}: unexpected payload: {e}")))
}

/// Decode a base64 `content` field.
///
/// Hosting APIs line-wrap the payload, so embedded line breaks are stripped
/// before decoding. Invalid UTF-8 decodes with replacement characters rather
/// than failing; structurally invalid base64 is a content error.
fn decode_content(path: &str, encoded: &str) -> Result<String> {
    let stripped = encoded.replace(['\n', '\r'], "");
    let bytes = BASE64
        .decode(stripped.as_bytes())
        .map_err(|e| Error::Content(format!("{path}: invalid base64 content: {e}")))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[async_trait]
impl HostingService for GitHubService {
    async fn get_branch(&self, name: &str) -> Result<Option<Branch>> {
        debug!(branch = name, "looking up branch");
        let endpoint = format!("branches/{name}");
        match self.get_json(&endpoint, &[]).await? {
            Lookup::Found(body) => Ok(Some(parse::<BranchPayload>(&endpoint, body)?.into())),
            Lookup::Absent => Ok(None),
        }
    }

    async fn get_file_content(&self, path: &str, branch: &str) -> Result<Option<String>> {
        debug!(path, branch, "fetching file content");
        let endpoint = format!("contents/{path}");
        let query = [("ref", branch.to_string())];
        match self.get_json(&endpoint, &query).await? {
            Lookup::Found(body) => {
                let payload: FileContentPayload = parse(&endpoint, body)?;
                decode_content(path, &payload.content).map(Some)
            }
            Lookup::Absent => Ok(None),
        }
    }

    async fn list_pull_requests(
        &self,
        state: &str,
        base: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<PullRequestRecord>> {
        debug!(state, base, page, "listing pull requests");
        let query = [
            ("state", state.to_string()),
            ("base", base.to_string()),
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
        ];
        match self.get_json("pulls", &query).await? {
            Lookup::Found(body) => {
                let payloads: Vec<PullRequestPayload> = parse("pulls", body)?;
                Ok(payloads.into_iter().map(Into::into).collect())
            }
            Lookup::Absent => Ok(Vec::new()),
        }
    }

    async fn get_pull_request(&self, number: u64) -> Result<Option<PullRequestRecord>> {
        debug!(pr_number = number, "fetching pull request");
        let endpoint = format!("pulls/{number}");
        match self.get_json(&endpoint, &[]).await? {
            Lookup::Found(body) => Ok(Some(parse::<PullRequestPayload>(&endpoint, body)?.into())),
            Lookup::Absent => Ok(None),
        }
    }

    async fn get_commit(&self, sha: &str) -> Result<Option<CommitRecord>> {
        debug!(sha, "fetching commit");
        let endpoint = format!("commits/{sha}");
        match self.get_json(&endpoint, &[]).await? {
            Lookup::Found(body) => Ok(Some(parse::<CommitPayload>(&endpoint, body)?.into())),
            Lookup::Absent => Ok(None),
        }
    }
}
