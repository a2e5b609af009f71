//! User configuration file
//!
//! An optional `config.toml` supplies defaults for the command-line flags:
//!
//! ```toml
//! format = "graphviz"
//! exclude_drafts = false
//! authors = ["alice", "bob"]
//! ```
//!
//! Flags given on the command line always win over the file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name under the platform config dir
const APP_DIR: &str = "gh-prtree";

/// Filename for the config file
const CONFIG_FILE: &str = "config.toml";

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "GH_PRTREE_CONFIG";

/// Values read from the config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default output format selector
    pub format: Option<String>,
    /// Default for draft exclusion
    pub exclude_drafts: Option<bool>,
    /// Default author allow-list
    pub authors: Vec<String>,
}

/// Default config file location, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Pick the config file path: explicit, then `$GH_PRTREE_CONFIG`, then default
pub fn config_path(explicit: Option<&Path>, env_override: Option<&str>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env_override.filter(|p| !p.is_empty()).map(PathBuf::from))
        .or_else(default_config_path)
}

/// Load config from `path`
///
/// Returns an empty `Config` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_config() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "format = \"json\"\nexclude_drafts = false\nauthors = [\"alice\", \"bob\"]\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert_eq!(config.exclude_drafts, Some(false));
        assert_eq!(config.authors, ["alice", "bob"]);
    }

    #[test]
    fn test_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "authors = [\"alice\"]\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.format, None);
        assert_eq!(config.exclude_drafts, None);
        assert_eq!(config.authors, ["alice"]);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "format = [not toml").unwrap();

        match load_config(&path) {
            Err(Error::Config(msg)) => assert!(msg.contains("failed to parse")),
            other => panic!("Expected Config error, got: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "colour = \"red\"\n").unwrap();
        assert!(matches!(load_config(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_config_path_precedence() {
        let explicit = Path::new("/tmp/explicit.toml");
        assert_eq!(
            config_path(Some(explicit), Some("/tmp/env.toml")),
            Some(PathBuf::from("/tmp/explicit.toml"))
        );
        assert_eq!(
            config_path(None, Some("/tmp/env.toml")),
            Some(PathBuf::from("/tmp/env.toml"))
        );
        assert_eq!(config_path(None, Some("")), default_config_path());
    }
}
