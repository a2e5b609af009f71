//! Error types for gh-prtree

use thiserror::Error;

/// Errors that can occur while resolving, fetching or loading configuration
///
/// Graph construction and rendering are infallible; every variant here comes
/// from the I/O shell around them.
#[derive(Error, Debug)]
pub enum Error {
    /// Repository specifier was not `OWNER/NAME` or `HOST/OWNER/NAME`
    #[error("invalid repository '{0}': expected OWNER/NAME or HOST/OWNER/NAME")]
    InvalidRepoSpec(String),

    /// Remote URL does not point at a GitHub-style `owner/repo`
    #[error("unsupported remote URL: {0}")]
    UnsupportedRemote(String),

    /// No repository given and none could be detected from the environment
    #[error("could not determine the current repository: {0}")]
    NoCurrentRepository(String),

    /// The repository lookup returned nothing
    #[error("repository not found: {0}")]
    RepositoryNotFound(String),

    /// The repository exists but has no default branch (empty repository)
    #[error("repository {0} has no default branch")]
    MissingDefaultBranch(String),

    /// No usable GitHub token
    #[error("authentication failed: {0}")]
    Auth(String),

    /// GitHub API returned an error or an unexpected payload
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Generic platform failure
    #[error("platform error: {0}")]
    Platform(String),

    /// Configuration file could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O failure writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Graph could not be serialized as JSON
    #[error("failed to serialize graph: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for gh-prtree operations
pub type Result<T> = std::result::Result<T, Error>;
