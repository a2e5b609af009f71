//! Platform service construction

use crate::auth::get_github_auth;
use crate::error::Result;
use crate::platform::{GitHubService, PlatformService};
use crate::types::PlatformConfig;
use tracing::debug;

/// Authenticate and create the service for a repository
pub fn create_platform_service(config: &PlatformConfig) -> Result<Box<dyn PlatformService>> {
    let auth = get_github_auth(config.host.as_deref())?;
    debug!(host = config.host_name(), source = ?auth.source, "creating GitHub service");
    let service = GitHubService::new(&auth.token, config.clone())?;
    Ok(Box::new(service))
}
