//! Branch existence check

use crate::platform::HostingService;
use tracing::{debug, warn};

/// Check whether a branch exists on the target repository.
///
/// Lookup errors are logged and treated as "does not exist".
pub async fn branch_exists(service: &dyn HostingService, name: &str) -> bool {
    match service.get_branch(name).await {
        Ok(Some(_)) => true,
        Ok(None) => {
            debug!(branch = name, "branch not found");
            false
        }
        Err(e) => {
            warn!(branch = name, error = %e, "branch lookup failed");
            false
        }
    }
}
