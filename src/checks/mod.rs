//! Resource checks against the hosting service
//!
//! Each check folds lookup errors into a definite negative outcome; nothing
//! here propagates an error to the orchestrator.

mod branch;
mod file;
mod pulls;

pub use branch::branch_exists;
pub use file::{FileCheckFailure, FileCheckReport, check_file, check_required_files};
pub use pulls::{classify_merge_method, find_merged_pr, verify_merge_target};
