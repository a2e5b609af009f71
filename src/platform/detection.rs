//! Repository specifier and remote URL parsing

use crate::error::{Error, Result};
use crate::types::{GITHUB_HOST, PlatformConfig};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// scp-like ssh remotes: `git@github.com:owner/repo.git`
static SCP_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[\w.-]+@)?([\w.-]+):([^/]+)/([^/]+?)(?:\.git)?$")
        .expect("scp remote pattern is valid")
});

/// Parse an explicit repository specifier
///
/// Accepts `OWNER/NAME` and `HOST/OWNER/NAME`. A `github.com` host is the
/// same as no host.
pub fn parse_repo_spec(spec: &str) -> Result<PlatformConfig> {
    let parts: Vec<&str> = spec.split('/').collect();
    if parts.iter().any(|p| p.trim().is_empty()) {
        return Err(Error::InvalidRepoSpec(spec.to_string()));
    }

    match parts.as_slice() {
        [owner, repo] => Ok(config(None, owner, repo)),
        [host, owner, repo] => Ok(config(Some(host), owner, repo)),
        _ => Err(Error::InvalidRepoSpec(spec.to_string())),
    }
}

/// Parse a git remote URL into a platform config
///
/// Handles https (`https://github.com/owner/repo.git`), scp-like ssh
/// (`git@github.com:owner/repo.git`) and `ssh://` URLs. Trailing slashes
/// and a `.git` suffix are ignored.
pub fn parse_repo_info(url: &str) -> Result<PlatformConfig> {
    let trimmed = url.trim().trim_end_matches('/');

    if let Some(caps) = SCP_REMOTE.captures(trimmed) {
        return Ok(config(Some(&caps[1]), &caps[2], &caps[3]));
    }

    let parsed = Url::parse(trimmed).map_err(|_| Error::UnsupportedRemote(url.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| Error::UnsupportedRemote(url.to_string()))?;

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    match segments.as_slice() {
        [owner, repo] => {
            let repo = repo.strip_suffix(".git").unwrap_or(repo);
            if repo.is_empty() {
                return Err(Error::UnsupportedRemote(url.to_string()));
            }
            Ok(config(Some(host), owner, repo))
        }
        _ => Err(Error::UnsupportedRemote(url.to_string())),
    }
}

fn config(host: Option<&str>, owner: &str, repo: &str) -> PlatformConfig {
    PlatformConfig {
        owner: owner.to_string(),
        repo: repo.to_string(),
        host: host.and_then(normalize_host),
    }
}

/// Map the public GitHub hosts to `None`
fn normalize_host(host: &str) -> Option<String> {
    let host = host.to_ascii_lowercase();
    match host.as_str() {
        GITHUB_HOST | "www.github.com" | "ssh.github.com" => None,
        _ => Some(host),
    }
}
