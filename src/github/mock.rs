//! wiremock-based GitHub mock server for testing.
//!
//! Provides `GitHubMockServer` for HTTP-level mocking of the issues-list
//! endpoint, so tests verify the actual request rather than stubbing the
//! client trait.
//!
//! # Usage
//!
//! ```ignore
//! let mock = GitHubMockServer::start().await;
//! mock.issues("owner", "repo")
//!     .issue("Fix security hole", "https://x/1")
//!     .get()
//!     .await;
//! let client = mock.client("owner", "repo");
//! ```

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::GitHubClient;

/// Create a mock issue JSON object as the list endpoint returns it.
/// Carries extra fields to check that decoding ignores them.
fn mock_issue(title: &str, url: &str) -> serde_json::Value {
    json!({
        "number": 1,
        "state": "open",
        "title": title,
        "html_url": url,
        "labels": [{"name": "security"}],
        "user": {"login": "testuser"}
    })
}

/// wiremock-based GitHub mock server for testing.
pub struct GitHubMockServer {
    server: MockServer,
}

impl GitHubMockServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get a GitHubClient configured to use this mock server.
    pub fn client(&self, owner: &str, repo: &str) -> GitHubClient {
        GitHubClient::with_base_url(&self.server.uri(), owner, repo, "test-token").unwrap()
    }

    /// Create a builder for the issues-list endpoint of one repository.
    pub fn issues<'a>(&'a self, owner: &'a str, repo: &'a str) -> MockIssuesBuilder<'a> {
        MockIssuesBuilder {
            server: &self.server,
            owner,
            repo,
            labels: None,
            issues: Vec::new(),
        }
    }
}

/// Builder for mocking GET /repos/{owner}/{repo}/issues.
pub struct MockIssuesBuilder<'a> {
    server: &'a MockServer,
    owner: &'a str,
    repo: &'a str,
    labels: Option<String>,
    issues: Vec<serde_json::Value>,
}

impl<'a> MockIssuesBuilder<'a> {
    /// Require an exact `labels` query parameter for the mock to match.
    pub fn labels(mut self, labels: &str) -> Self {
        self.labels = Some(labels.to_string());
        self
    }

    /// Append an issue to the response body.
    pub fn issue(mut self, title: &str, url: &str) -> Self {
        self.issues.push(mock_issue(title, url));
        self
    }

    /// Mount the endpoint returning 200 with the configured issues.
    pub async fn get(self) {
        let owner = self.owner;
        let repo = self.repo;
        let mut mock = Mock::given(method("GET"))
            .and(path(format!("/repos/{owner}/{repo}/issues")))
            .and(query_param("state", "open"))
            .and(header("authorization", "token test-token"));

        if let Some(labels) = &self.labels {
            mock = mock.and(query_param("labels", labels.as_str()));
        }

        mock.respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::Value::Array(self.issues)),
        )
        .mount(self.server)
        .await;
    }

    /// Mount the endpoint returning the given error status.
    pub async fn get_error(self, status: u16) {
        let owner = self.owner;
        let repo = self.repo;
        Mock::given(method("GET"))
            .and(path(format!("/repos/{owner}/{repo}/issues")))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "message": "Server Error",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(self.server)
            .await;
    }

    /// Mount the endpoint returning a 200 whose body is not valid JSON.
    pub async fn get_invalid_body(self) {
        let owner = self.owner;
        let repo = self.repo;
        Mock::given(method("GET"))
            .and(path(format!("/repos/{owner}/{repo}/issues")))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(self.server)
            .await;
    }
}
