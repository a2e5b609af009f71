//! Shared command context for CLI commands
//!
//! Resolves which repository to talk to and authenticates against it.

use gh_prtree::error::Result;
use gh_prtree::fetch::fetch_repository;
use gh_prtree::platform::{PlatformService, create_platform_service};
use gh_prtree::repo::resolve_repository;
use gh_prtree::types::Repository;
use std::path::Path;

/// Context for commands that read from the platform
///
/// This struct encapsulates the common setup:
/// - Resolving the repository (explicit specifier, `$GH_REPO`, or git remote)
/// - Authenticating and creating the platform service
/// - Looking the repository up on GitHub
pub struct CommandContext {
    /// Platform service (GitHub)
    pub platform: Box<dyn PlatformService>,
    /// The repository as reported by GitHub
    pub repository: Repository,
}

impl CommandContext {
    /// Create a new command context
    pub async fn new(path: &Path, repository: Option<&str>) -> Result<Self> {
        let platform_config = resolve_repository(repository, path)?;
        let platform = create_platform_service(&platform_config)?;
        let repository = fetch_repository(platform.as_ref()).await?;

        Ok(Self {
            platform,
            repository,
        })
    }
}
