//! Shared test fixtures and mocks
//!
//! Compiled into each test binary; not every helper is used by every binary.

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::{ListPullsCall, MockHostingService};

use chrono::{TimeZone, Utc};
use relcheck::types::{Branch, CommitRecord, ContentRule, FileRequirement, PullRequestRecord};

/// Make a PR record with the given merge state
pub fn make_pr(number: u64, title: &str, merged: bool, base: &str) -> PullRequestRecord {
    PullRequestRecord {
        number,
        title: title.to_string(),
        merged_at: merged.then(|| Utc.with_ymd_and_hms(2025, 8, 7, 12, 0, 0).unwrap()),
        base_ref: base.to_string(),
        merge_commit_sha: Some(format!("sha-{number}")),
    }
}

/// Make a branch record
pub fn make_branch(name: &str) -> Branch {
    Branch {
        name: name.to_string(),
        commit_sha: format!("sha-{name}"),
    }
}

/// Make a commit record
pub fn make_commit(sha: &str, parent_count: usize, message: &str) -> CommitRecord {
    CommitRecord {
        sha: sha.to_string(),
        parent_count,
        message: message.to_string(),
    }
}

/// Make a file requirement with a single required substring
pub fn make_requirement(path: &str, min_size: usize, needle: &str) -> FileRequirement {
    FileRequirement {
        name: path.to_string(),
        path: path.to_string(),
        branch: "main".to_string(),
        min_size,
        rule: ContentRule::ExactOne(needle.to_string()),
    }
}
