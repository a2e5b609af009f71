//! Mock platform service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use gh_prtree::error::{Error, Result};
use gh_prtree::platform::PlatformService;
use gh_prtree::types::{PlatformConfig, PullRequest, Repository};
use std::collections::HashMap;
use std::sync::Mutex;

/// Simple mock platform service for testing
///
/// This manually implements `PlatformService` rather than using mockall,
/// because mockall has issues with methods returning references.
///
/// Features:
/// - Canned repositories and PR lists keyed by `owner/name`
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    config: PlatformConfig,
    repositories: Mutex<HashMap<String, Repository>>,
    pull_requests: Mutex<HashMap<String, Vec<PullRequest>>>,
    // Call tracking
    get_repository_calls: Mutex<Vec<String>>,
    list_pr_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_get_repository: Mutex<Option<String>>,
    error_on_list_prs: Mutex<Option<String>>,
}

fn key(owner: &str, name: &str) -> String {
    format!("{owner}/{name}")
}

impl MockPlatformService {
    /// Create a new mock with the given config
    pub fn with_config(config: PlatformConfig) -> Self {
        Self {
            config,
            repositories: Mutex::new(HashMap::new()),
            pull_requests: Mutex::new(HashMap::new()),
            get_repository_calls: Mutex::new(Vec::new()),
            list_pr_calls: Mutex::new(Vec::new()),
            error_on_get_repository: Mutex::new(None),
            error_on_list_prs: Mutex::new(None),
        }
    }

    // === Response setup ===

    /// Register a repository under its `owner/name`
    pub fn add_repository(&self, repository: Repository) {
        let k = key(&repository.owner.login, &repository.name);
        self.repositories.lock().unwrap().insert(k, repository);
    }

    /// Set the open PRs returned for `owner/name`
    pub fn set_pull_requests(&self, owner: &str, name: &str, prs: Vec<PullRequest>) {
        self.pull_requests
            .lock()
            .unwrap()
            .insert(key(owner, name), prs);
    }

    // === Error injection methods ===

    /// Make `get_repository` return an error
    pub fn fail_get_repository(&self, msg: &str) {
        *self.error_on_get_repository.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `list_open_pull_requests` return an error
    pub fn fail_list_prs(&self, msg: &str) {
        *self.error_on_list_prs.lock().unwrap() = Some(msg.to_string());
    }

    // === Call inspection ===

    /// Repositories looked up, as `owner/name`
    pub fn get_repository_calls(&self) -> Vec<String> {
        self.get_repository_calls.lock().unwrap().clone()
    }

    /// Repositories whose PRs were listed, as `owner/name`
    pub fn list_pr_calls(&self) -> Vec<String> {
        self.list_pr_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn get_repository(&self, owner: &str, name: &str) -> Result<Repository> {
        let k = key(owner, name);
        self.get_repository_calls.lock().unwrap().push(k.clone());

        if let Some(msg) = self.error_on_get_repository.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        self.repositories
            .lock()
            .unwrap()
            .get(&k)
            .cloned()
            .ok_or(Error::RepositoryNotFound(k))
    }

    async fn list_open_pull_requests(&self, owner: &str, name: &str) -> Result<Vec<PullRequest>> {
        let k = key(owner, name);
        self.list_pr_calls.lock().unwrap().push(k.clone());

        if let Some(msg) = self.error_on_list_prs.lock().unwrap().as_ref() {
            return Err(Error::Platform(msg.clone()));
        }

        Ok(self
            .pull_requests
            .lock()
            .unwrap()
            .get(&k)
            .cloned()
            .unwrap_or_default())
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
