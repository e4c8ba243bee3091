//! Release verification against a hosting API.
//!
//! Checks that a release was executed correctly on a remote repository:
//! required branches exist, required files carry required content, and the
//! release pull request was squash-merged into the configured base branch.
//! Produces a pass/fail verdict and a persisted fixed-format report.

pub mod auth;
pub mod checks;
pub mod config;
pub mod error;
pub mod platform;
pub mod types;
pub mod verify;
