//! GitHub token lookup

use super::AuthSource;
use crate::error::{Error, Result};
use std::process::Command;
use tracing::debug;

/// Env vars checked for github.com, in order
const GITHUB_TOKEN_VARS: &[&str] = &["GH_TOKEN", "GITHUB_TOKEN"];

/// Env vars checked first for enterprise hosts
const ENTERPRISE_TOKEN_VARS: &[&str] = &["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"];

/// Resolved GitHub credentials
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// API token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

/// Resolve a token for `host` from the process environment or `gh`
pub fn get_github_auth(host: Option<&str>) -> Result<GitHubAuthConfig> {
    resolve_github_auth(host, |key| std::env::var(key).ok(), gh_auth_token)
}

/// Resolve a token with explicit env and CLI lookups
///
/// Environment variables win over the CLI. Enterprise hosts check the
/// `*_ENTERPRISE_TOKEN` variables before the generic ones. Empty values are
/// ignored.
pub fn resolve_github_auth<E, C>(host: Option<&str>, env: E, cli: C) -> Result<GitHubAuthConfig>
where
    E: Fn(&str) -> Option<String>,
    C: FnOnce(Option<&str>) -> Option<String>,
{
    let vars = host
        .map(|_| ENTERPRISE_TOKEN_VARS)
        .into_iter()
        .flatten()
        .chain(GITHUB_TOKEN_VARS);

    for &var in vars {
        if let Some(token) = env(var).filter(|t| !t.trim().is_empty()) {
            debug!(var, "using GitHub token from environment");
            return Ok(GitHubAuthConfig {
                token: token.trim().to_string(),
                source: AuthSource::EnvVar,
            });
        }
    }

    if let Some(token) = cli(host).filter(|t| !t.trim().is_empty()) {
        debug!("using GitHub token from gh CLI");
        return Ok(GitHubAuthConfig {
            token: token.trim().to_string(),
            source: AuthSource::Cli,
        });
    }

    Err(Error::Auth(
        "no GitHub token found. Set GH_TOKEN or run 'gh auth login'.".to_string(),
    ))
}

/// Ask the `gh` CLI for its stored token
fn gh_auth_token(host: Option<&str>) -> Option<String> {
    let mut cmd = Command::new("gh");
    cmd.args(["auth", "token"]);
    if let Some(h) = host {
        cmd.args(["--hostname", h]);
    }

    match cmd.output() {
        Ok(output) if output.status.success() => {
            String::from_utf8(output.stdout).ok().map(|s| s.trim().to_string())
        }
        Ok(output) => {
            debug!(status = %output.status, "gh auth token failed");
            None
        }
        Err(e) => {
            debug!(error = %e, "gh CLI not available");
            None
        }
    }
}
