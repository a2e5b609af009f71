//! Shared test fixtures

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::MockPlatformService;

use gh_prtree::types::{
    Author, BranchRef, PlatformConfig, PullRequest, Repository, RepositoryOwner,
};

/// PR with `head -> base`, title `Title {id}` and author `octocat`
pub fn make_pr(id: &str, head: &str, base: &str) -> PullRequest {
    PullRequest {
        id: id.to_string(),
        title: format!("Title {id}"),
        url: format!("https://github.com/octo/repo/pull/{id}"),
        is_draft: false,
        is_approved: false,
        base_ref_name: base.to_string(),
        head_ref_name: head.to_string(),
        author: Author {
            login: "octocat".to_string(),
        },
    }
}

/// Same as [`make_pr`] with an explicit author and draft flag
pub fn make_pr_by(id: &str, head: &str, base: &str, author: &str, draft: bool) -> PullRequest {
    PullRequest {
        is_draft: draft,
        author: Author {
            login: author.to_string(),
        },
        ..make_pr(id, head, base)
    }
}

/// Repository `owner/name` with the given default branch
pub fn make_repository(owner: &str, name: &str, default_branch: Option<&str>) -> Repository {
    Repository {
        id: format!("R_{name}"),
        name: name.to_string(),
        default_branch_ref: default_branch.map(|b| BranchRef {
            name: b.to_string(),
        }),
        owner: RepositoryOwner {
            id: format!("U_{owner}"),
            login: owner.to_string(),
        },
    }
}

/// Config for a github.com repository
pub fn github_config(owner: &str, repo: &str) -> PlatformConfig {
    PlatformConfig {
        owner: owner.to_string(),
        repo: repo.to_string(),
        host: None,
    }
}
