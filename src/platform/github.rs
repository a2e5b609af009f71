//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{Author, PlatformConfig, PullRequest, Repository};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Pull requests requested per GraphQL page
const PAGE_SIZE: u32 = 50;

const REPOSITORY_QUERY: &str = r"
    query Repository($owner: String!, $name: String!) {
        repository(owner: $owner, name: $name) {
            id
            name
            defaultBranchRef { name }
            owner { id login }
        }
    }
";

const PULL_REQUESTS_QUERY: &str = r"
    query PullRequests($owner: String!, $name: String!, $states: [PullRequestState!], $first: Int!, $after: String) {
        repository(owner: $owner, name: $name) {
            pullRequests(states: $states, first: $first, after: $after) {
                nodes {
                    id
                    title
                    url
                    isDraft
                    reviewDecision
                    baseRefName
                    headRefName
                    author { login }
                }
                pageInfo { hasNextPage endCursor }
            }
        }
    }
";

// GraphQL response types

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct RepositoryData {
    repository: Option<Repository>,
}

#[derive(Deserialize)]
struct PullRequestsData {
    repository: Option<PullRequestsRepository>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestsRepository {
    pull_requests: PullRequestConnection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PullRequestConnection {
    nodes: Vec<GraphQlPullRequest>,
    page_info: PageInfo,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Deserialize)]
struct GraphQlActor {
    login: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlPullRequest {
    id: String,
    title: String,
    url: String,
    is_draft: bool,
    review_decision: Option<String>,
    base_ref_name: String,
    head_ref_name: String,
    author: Option<GraphQlActor>,
}

impl From<GraphQlPullRequest> for PullRequest {
    fn from(pr: GraphQlPullRequest) -> Self {
        Self {
            id: pr.id,
            title: pr.title,
            url: pr.url,
            is_draft: pr.is_draft,
            is_approved: pr.review_decision.as_deref() == Some("APPROVED"),
            base_ref_name: pr.base_ref_name,
            head_ref_name: pr.head_ref_name,
            author: Author {
                login: pr.author.map(|a| a.login).unwrap_or_default(),
            },
        }
    }
}

/// GitHub service using octocrab's GraphQL endpoint
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
    graphql_endpoint: String,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// Enterprise hosts serve REST under `https://HOST/api/v3` and GraphQL at
    /// `https://HOST/api/graphql`.
    pub fn new(token: &str, config: PlatformConfig) -> Result<Self> {
        match config.host.clone() {
            Some(host) => Self::build(
                token,
                config,
                Some(&format!("https://{host}/api/v3")),
                format!("https://{host}/api/graphql"),
            ),
            None => Self::build(token, config, None, "/graphql".to_string()),
        }
    }

    /// Create a service talking to an explicit API base URI
    ///
    /// GraphQL requests go to `{base_uri}/graphql`.
    pub fn with_base_uri(token: &str, config: PlatformConfig, base_uri: &str) -> Result<Self> {
        let endpoint = format!("{}/graphql", base_uri.trim_end_matches('/'));
        Self::build(token, config, Some(base_uri), endpoint)
    }

    fn build(
        token: &str,
        config: PlatformConfig,
        base_uri: Option<&str>,
        graphql_endpoint: String,
    ) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(uri) = base_uri {
            builder = builder
                .base_uri(uri)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self {
            client,
            config,
            graphql_endpoint,
        })
    }

    /// Run a GraphQL query and unwrap the `data` member
    async fn query<T: DeserializeOwned>(&self, payload: &serde_json::Value) -> Result<T> {
        let response: GraphQlResponse<T> = self
            .client
            .post(&self.graphql_endpoint, Some(payload))
            .await
            .map_err(|e| Error::GitHubApi(format!("GraphQL query failed: {e}")))?;

        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
            return Err(Error::GitHubApi(format!(
                "GraphQL error: {}",
                messages.join(", ")
            )));
        }

        response
            .data
            .ok_or_else(|| Error::GitHubApi("No data in GraphQL response".to_string()))
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn get_repository(&self, owner: &str, name: &str) -> Result<Repository> {
        debug!(owner, name, "fetching repository");

        let data: RepositoryData = self
            .query(&serde_json::json!({
                "query": REPOSITORY_QUERY,
                "variables": { "owner": owner, "name": name }
            }))
            .await?;

        let repository = data
            .repository
            .ok_or_else(|| Error::RepositoryNotFound(format!("{owner}/{name}")))?;

        debug!(
            id = %repository.id,
            default_branch = ?repository.default_branch(),
            "fetched repository"
        );
        Ok(repository)
    }

    async fn list_open_pull_requests(&self, owner: &str, name: &str) -> Result<Vec<PullRequest>> {
        debug!(owner, name, "listing open PRs");

        let mut pull_requests = Vec::new();
        let mut after: Option<String> = None;
        let mut page = 0_u32;

        loop {
            page += 1;
            let data: PullRequestsData = self
                .query(&serde_json::json!({
                    "query": PULL_REQUESTS_QUERY,
                    "variables": {
                        "owner": owner,
                        "name": name,
                        "states": ["OPEN"],
                        "first": PAGE_SIZE,
                        "after": after,
                    }
                }))
                .await?;

            let connection = data
                .repository
                .ok_or_else(|| Error::RepositoryNotFound(format!("{owner}/{name}")))?
                .pull_requests;

            debug!(page, count = connection.nodes.len(), "fetched PR page");
            pull_requests.extend(connection.nodes.into_iter().map(PullRequest::from));

            match connection.page_info {
                PageInfo {
                    has_next_page: false,
                    ..
                } => break,
                PageInfo {
                    end_cursor: Some(cursor),
                    ..
                } => after = Some(cursor),
                PageInfo {
                    end_cursor: None, ..
                } => {
                    return Err(Error::GitHubApi(format!(
                        "page {page} of pull requests has hasNextPage without endCursor"
                    )));
                }
            }
        }

        debug!(count = pull_requests.len(), pages = page, "listed open PRs");
        Ok(pull_requests)
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}
