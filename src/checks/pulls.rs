//! Release pull-request resolution
//!
//! Finds the merged release PR and classifies how it was merged.

use crate::platform::HostingService;
use crate::types::{MergeMethod, PullRequestRecord};
use tracing::{debug, warn};

/// Find the first merged PR whose title contains `keyword`.
///
/// Pages through the server-side-filtered listing in returned order — no
/// client-side re-sort. The title match is case-insensitive and the PR must
/// have a non-null merge timestamp. Paging stops on a short page (listing
/// exhausted) or on the first match. Listing errors are logged and treated
/// as "no match".
pub async fn find_merged_pr(
    service: &dyn HostingService,
    keyword: &str,
    base: &str,
    state: &str,
    per_page: u32,
) -> Option<PullRequestRecord> {
    let keyword_lower = keyword.to_lowercase();
    let mut page = 1;

    loop {
        let prs = match service.list_pull_requests(state, base, page, per_page).await {
            Ok(prs) => prs,
            Err(e) => {
                warn!(page, error = %e, "pull request listing failed");
                return None;
            }
        };

        let page_len = prs.len();
        for pr in prs {
            if pr.merged_at.is_some() && pr.title.to_lowercase().contains(&keyword_lower) {
                debug!(pr_number = pr.number, title = %pr.title, "found merged release PR");
                return Some(pr);
            }
        }

        // A short page means the listing is exhausted
        if page_len < per_page as usize {
            return None;
        }
        page += 1;
    }
}

/// Diagnostic: does the PR's base branch match the expected merge target?
///
/// A mismatch is logged but does not alter the run verdict.
pub async fn verify_merge_target(
    service: &dyn HostingService,
    pr_number: u64,
    expected_base: &str,
) -> bool {
    match service.get_pull_request(pr_number).await {
        Ok(Some(pr)) => {
            if pr.base_ref == expected_base {
                true
            } else {
                warn!(
                    pr_number,
                    actual = %pr.base_ref,
                    expected = %expected_base,
                    "release PR merged into unexpected base branch"
                );
                false
            }
        }
        Ok(None) => {
            warn!(pr_number, "release PR detail not found");
            false
        }
        Err(e) => {
            warn!(pr_number, error = %e, "release PR detail lookup failed");
            false
        }
    }
}

/// Classify how a PR was merged by inspecting its merge commit.
///
/// A squash merge produces a single-parent commit whose message references
/// the originating PR number. A merge commit has two parents; a rebase merge
/// has one parent but omits the `#N` reference, so the message check
/// disambiguates. Returns the classification and the observed parent count.
pub async fn classify_merge_method(
    service: &dyn HostingService,
    pr_number: u64,
    expected_parent_count: usize,
) -> (MergeMethod, usize) {
    let pr = match service.get_pull_request(pr_number).await {
        Ok(Some(pr)) => pr,
        Ok(None) => return (MergeMethod::NotFound, 0),
        Err(e) => {
            warn!(pr_number, error = %e, "pull request lookup failed");
            return (MergeMethod::NotFound, 0);
        }
    };

    let Some(sha) = pr.merge_commit_sha.filter(|sha| !sha.is_empty()) else {
        debug!(pr_number, "pull request has no merge commit");
        return (MergeMethod::NotFound, 0);
    };

    let commit = match service.get_commit(&sha).await {
        Ok(Some(commit)) => commit,
        Ok(None) => return (MergeMethod::NotFound, 0),
        Err(e) => {
            warn!(pr_number, sha = %sha, error = %e, "merge commit lookup failed");
            return (MergeMethod::NotFound, 0);
        }
    };

    let reference = format!("#{pr_number}");
    if commit.parent_count == expected_parent_count && commit.message.contains(&reference) {
        (MergeMethod::Squash, commit.parent_count)
    } else {
        (MergeMethod::Other, commit.parent_count)
    }
}
