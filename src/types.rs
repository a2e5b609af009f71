//! Core types for gh-prtree

use serde::{Deserialize, Serialize};

/// Login of the account that opened a pull request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    /// Account login (empty for deleted accounts)
    pub login: String,
}

/// An open pull request as seen by the graph builder
///
/// Field names serialize in camelCase so the JSON output matches GitHub's
/// GraphQL vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    /// Opaque GraphQL node ID (e.g. `PR_kwDOAbc123`)
    pub id: String,
    /// PR title
    pub title: String,
    /// Web URL for the PR
    pub url: String,
    /// Whether PR is a draft
    pub is_draft: bool,
    /// Whether the PR's review decision is "approved"
    pub is_approved: bool,
    /// Base (target) branch name
    pub base_ref_name: String,
    /// Head (source) branch name
    pub head_ref_name: String,
    /// PR author
    pub author: Author,
}

/// Reference to a named branch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BranchRef {
    /// Branch name
    pub name: String,
}

/// Owner of a repository (user or organization)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryOwner {
    /// GraphQL node ID
    pub id: String,
    /// Owner login
    pub login: String,
}

/// A GitHub repository
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// GraphQL node ID
    pub id: String,
    /// Repository name
    pub name: String,
    /// Default branch (None for an empty repository)
    pub default_branch_ref: Option<BranchRef>,
    /// Repository owner
    pub owner: RepositoryOwner,
}

impl Repository {
    /// Default branch name, if the repository has one
    pub fn default_branch(&self) -> Option<&str> {
        self.default_branch_ref
            .as_ref()
            .map(|r| r.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// `owner/name` form, for messages
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

/// A git remote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitRemote {
    /// Remote name (e.g., "origin")
    pub name: String,
    /// Remote URL
    pub url: String,
}

/// Where a repository lives on GitHub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// GitHub Enterprise host (None for github.com)
    pub host: Option<String>,
}

impl PlatformConfig {
    /// Host name to talk to, `github.com` unless an enterprise host is set
    pub fn host_name(&self) -> &str {
        self.host.as_deref().unwrap_or(GITHUB_HOST)
    }
}

impl std::fmt::Display for PlatformConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.host {
            Some(host) => write!(f, "{host}/{}/{}", self.owner, self.repo),
            None => write!(f, "{}/{}", self.owner, self.repo),
        }
    }
}

/// Public GitHub host name
pub const GITHUB_HOST: &str = "github.com";
