//! GitHub REST API client for listing labeled issues.

use reqwest::header;

use super::error::{FetchError, Result};
use super::models::Issue;

const GITHUB_API_BASE: &str = "https://api.github.com";
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Capability trait for fetching candidate issues.
///
/// The poll loop depends on this instead of a concrete client so tests can
/// substitute a fake source without network access.
#[async_trait::async_trait]
pub trait IssueSource: Send + Sync {
    /// Fetch open issues carrying all of the given labels, in API order.
    ///
    /// Only the API's first default-size page is returned; the watcher does
    /// not paginate.
    async fn fetch_open_issues(&self, labels: &[String]) -> Result<Vec<Issue>>;
}

/// Production implementation using reqwest against the GitHub REST API.
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    owner: String,
    repo: String,
    token: String,
}

impl GitHubClient {
    /// Create a client against the public GitHub API.
    pub fn new(owner: &str, repo: &str, token: &str) -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE, owner, repo, token)
    }

    /// Create a client against a custom API base URL.
    /// Used by tests to point the client at a mock server.
    pub fn with_base_url(base_url: &str, owner: &str, repo: &str, token: &str) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: token.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl IssueSource for GitHubClient {
    async fn fetch_open_issues(&self, labels: &[String]) -> Result<Vec<Issue>> {
        let url = format!(
            "{}/repos/{}/{}/issues",
            self.base_url, self.owner, self.repo
        );
        let labels_param = labels.join(",");
        tracing::debug!(%url, labels = %labels_param, "fetching open issues");

        let response = self
            .http
            .get(&url)
            .query(&[("labels", labels_param.as_str()), ("state", "open")])
            .header(header::AUTHORIZATION, format!("token {}", self.token))
            .header(header::ACCEPT, ACCEPT_HEADER)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let issues: Vec<Issue> = serde_json::from_str(&body)?;
        tracing::debug!(count = issues.len(), "fetched issues");
        Ok(issues)
    }
}
