//! Credential resolution from the process environment
//!
//! Reads the API token and organization name from environment variables,
//! optionally pre-populated from a local env file.

use crate::config::EnvConfig;
use crate::error::{Error, Result};
use tracing::{debug, warn};

/// Resolved credentials for a verification run
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Bearer token for the hosting API
    pub token: String,
    /// Organization owning the target repository
    pub organization: String,
}

/// Resolve credentials from the environment.
///
/// Loads the configured env file first when it exists, then reads the token
/// and organization variables. Empty values are treated as missing; either
/// one missing is fatal before any network call.
pub fn resolve_credentials(cfg: &EnvConfig) -> Result<Credentials> {
    if cfg.env_file.exists() {
        match dotenvy::from_path(&cfg.env_file) {
            Ok(()) => debug!(file = %cfg.env_file.display(), "loaded env file"),
            Err(e) => warn!(file = %cfg.env_file.display(), error = %e, "failed to load env file"),
        }
    }

    let token = non_empty_var(&cfg.token_var)
        .ok_or_else(|| Error::Config(format!("missing environment variable {}", cfg.token_var)))?;
    let organization = non_empty_var(&cfg.org_var)
        .ok_or_else(|| Error::Config(format!("missing environment variable {}", cfg.org_var)))?;

    Ok(Credentials {
        token,
        organization,
    })
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
