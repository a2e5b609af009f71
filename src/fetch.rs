//! Pull request fetching and filtering
//!
//! `fetch_pull_requests` is the only effectful step; filtering is a pure
//! pass over the fetched list and keeps the platform's order.

use crate::error::{Error, Result};
use crate::graph::{PrGraph, build_pr_graph};
use crate::platform::PlatformService;
use crate::types::{PullRequest, Repository};
use tracing::debug;

/// Which fetched PRs make it into the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestFilter {
    /// Drop draft PRs
    pub exclude_drafts: bool,
    /// Keep only PRs by these logins (empty = everyone)
    pub authors: Vec<String>,
}

impl Default for PullRequestFilter {
    fn default() -> Self {
        Self {
            exclude_drafts: true,
            authors: Vec::new(),
        }
    }
}

impl PullRequestFilter {
    /// Whether a single PR passes the filter
    pub fn matches(&self, pr: &PullRequest) -> bool {
        if self.exclude_drafts && pr.is_draft {
            return false;
        }
        self.authors.is_empty() || self.authors.iter().any(|a| *a == pr.author.login)
    }

    /// Apply the filter, preserving order
    pub fn apply(&self, pull_requests: Vec<PullRequest>) -> Vec<PullRequest> {
        pull_requests.into_iter().filter(|pr| self.matches(pr)).collect()
    }
}

/// Look up the repository the platform was configured for
pub async fn fetch_repository(platform: &dyn PlatformService) -> Result<Repository> {
    let config = platform.config();
    debug!(repository = %config, "looking up repository");
    platform.get_repository(&config.owner, &config.repo).await
}

/// Fetch every open PR of `repository` and apply `filter`
pub async fn fetch_pull_requests(
    platform: &dyn PlatformService,
    repository: &Repository,
    filter: &PullRequestFilter,
) -> Result<Vec<PullRequest>> {
    let all = platform
        .list_open_pull_requests(&repository.owner.login, &repository.name)
        .await?;
    let total = all.len();

    let kept = filter.apply(all);
    debug!(
        total,
        kept = kept.len(),
        exclude_drafts = filter.exclude_drafts,
        authors = filter.authors.len(),
        "filtered PRs"
    );
    Ok(kept)
}

/// Fetch, filter and build the graph for `repository` in one step
pub async fn fetch_pr_graph(
    platform: &dyn PlatformService,
    repository: &Repository,
    filter: &PullRequestFilter,
) -> Result<PrGraph> {
    let default_branch = repository
        .default_branch()
        .ok_or_else(|| Error::MissingDefaultBranch(repository.full_name()))?
        .to_string();
    let pull_requests = fetch_pull_requests(platform, repository, filter).await?;
    Ok(build_pr_graph(&default_branch, pull_requests))
}
