//! Current repository detection
//!
//! When no repository is given on the command line, the repository is taken
//! from `$GH_REPO` or from the git remotes of the working directory.

use crate::error::{Error, Result};
use crate::platform::{parse_repo_info, parse_repo_spec};
use crate::types::{GitRemote, PlatformConfig};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Remote names tried in order before falling back to the first remote
const PREFERRED_REMOTES: &[&str] = &["upstream", "github", "origin"];

/// Resolve the repository to query
///
/// An explicit, non-empty specifier always wins. Otherwise `$GH_REPO` is
/// used, then the remotes of the git repository at `path`.
pub fn resolve_repository(spec: Option<&str>, path: &Path) -> Result<PlatformConfig> {
    resolve_repository_with(spec, std::env::var("GH_REPO").ok().as_deref(), || {
        git_remotes(path)
    })
}

/// Resolve with explicit `$GH_REPO` value and remote lookup
pub fn resolve_repository_with<F>(
    spec: Option<&str>,
    gh_repo: Option<&str>,
    remotes: F,
) -> Result<PlatformConfig>
where
    F: FnOnce() -> Result<Vec<GitRemote>>,
{
    if let Some(spec) = spec.filter(|s| !s.is_empty()) {
        debug!(spec, "using explicit repository");
        return parse_repo_spec(spec);
    }

    if let Some(spec) = gh_repo.filter(|s| !s.is_empty()) {
        debug!(spec, "using GH_REPO");
        return parse_repo_spec(spec);
    }

    let remotes = remotes()?;
    let remote = select_remote(&remotes)
        .ok_or_else(|| Error::NoCurrentRepository("no git remotes found".to_string()))?;
    debug!(remote = %remote.name, url = %remote.url, "using git remote");

    parse_repo_info(&remote.url).map_err(|e| {
        Error::NoCurrentRepository(format!("remote '{}' is not usable: {e}", remote.name))
    })
}

/// Pick the remote to use: `upstream`, `github`, `origin`, then the first one
pub fn select_remote(remotes: &[GitRemote]) -> Option<&GitRemote> {
    PREFERRED_REMOTES
        .iter()
        .find_map(|name| remotes.iter().find(|r| r.name == *name))
        .or_else(|| remotes.first())
}

/// List the fetch remotes of the git repository at `path`
pub fn git_remotes(path: &Path) -> Result<Vec<GitRemote>> {
    let output = Command::new("git")
        .arg("-C")
        .arg(path)
        .args(["remote", "-v"])
        .output()
        .map_err(|e| Error::NoCurrentRepository(format!("failed to run git: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::NoCurrentRepository(stderr.trim().to_string()));
    }

    Ok(parse_remote_list(&String::from_utf8_lossy(&output.stdout)))
}

/// Parse `git remote -v` output, keeping the fetch URL of each remote
pub fn parse_remote_list(output: &str) -> Vec<GitRemote> {
    let mut remotes: Vec<GitRemote> = Vec::new();

    for line in output.lines() {
        let mut fields = line.split_whitespace();
        let (Some(name), Some(url)) = (fields.next(), fields.next()) else {
            continue;
        };
        if fields.next() == Some("(push)") {
            continue;
        }
        if remotes.iter().any(|r| r.name == name) {
            continue;
        }
        remotes.push(GitRemote {
            name: name.to_string(),
            url: url.to_string(),
        });
    }

    remotes
}
