//! Platform services for GitHub
//!
//! Provides the read-only interface the PR tree needs: repository lookup and
//! the full list of open pull requests.

mod detection;
mod factory;
mod github;

pub use detection::{parse_repo_info, parse_repo_spec};
pub use factory::create_platform_service;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{PlatformConfig, PullRequest, Repository};
use async_trait::async_trait;

/// Platform service trait for PR queries
///
/// Read-only. Implementations resolve pagination internally: callers always
/// receive the complete list.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Look up a repository by owner and name
    async fn get_repository(&self, owner: &str, name: &str) -> Result<Repository>;

    /// List every open pull request, following pagination to the end
    ///
    /// Order is the platform's listing order and is preserved.
    async fn list_open_pull_requests(&self, owner: &str, name: &str) -> Result<Vec<PullRequest>>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
