use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{DecodeError, Error, Result};
use crate::models::CatalogEntry;

/// The one upstream this tool talks to.
pub const REPOSITORY_URL: &str = "https://api.github.com/repos/github/gitignore";

/// Responsible for all communication with the GitHub contents API.
///
/// Each call is exactly one request: no retries, no caching.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Client against the public `github/gitignore` repository.
    pub fn new() -> Result<Self> {
        Self::with_base_url(REPOSITORY_URL)
    }

    /// Client against another contents-API compatible base, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("gitignite"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let base_url = base_url.into();
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|source| Error::Transport {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists every file in the template directory, in upstream order.
    pub async fn list_entries(&self) -> Result<Vec<CatalogEntry>> {
        let url = format!("{}/contents", self.base_url);
        let (status, body) = self.get(&url).await?;
        if !status.is_success() {
            return Err(Error::UpstreamStatus { url, status });
        }

        let entries: Vec<CatalogEntry> = serde_json::from_slice(&body)
            .map_err(|e| DecodeError::MalformedJson(e.to_string()))?;
        tracing::debug!(count = entries.len(), "fetched catalog");
        Ok(entries)
    }

    /// Fetches the raw contents-API body for `name`, used verbatim.
    ///
    /// A 404 body is returned as is: it carries no `content` field, which the
    /// decoder reports as "language not found". Any other error status fails.
    pub async fn fetch_by_exact_name(&self, name: &str) -> Result<Vec<u8>> {
        let url = format!("{}/contents/{}", self.base_url, name);
        let (status, body) = self.get(&url).await?;
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(%status, name, "template missing upstream");
        } else if !status.is_success() {
            return Err(Error::UpstreamStatus { url, status });
        }
        Ok(body)
    }

    async fn get(&self, url: &str) -> Result<(reqwest::StatusCode, Vec<u8>)> {
        tracing::debug!(url, "GET");
        let transport = |source| Error::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;
        Ok((status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn default_client_targets_github() {
        let client = ApiClient::new().unwrap();
        assert_eq!(client.base_url(), REPOSITORY_URL);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::with_base_url("http://localhost:8080/repo/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/repo");
    }

    #[tokio::test]
    async fn list_entries_preserves_upstream_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/contents")
                    .header("user-agent", "gitignite");
                then.status(200).json_body(serde_json::json!([
                    {"name": "Rust.gitignore", "type": "file"},
                    {"name": "README.md", "type": "file"},
                    {"name": "Go.gitignore", "type": "file"},
                    {"name": "Global", "type": "dir"}
                ]));
            })
            .await;

        let client = ApiClient::with_base_url(server.base_url()).unwrap();
        let entries = client.list_entries().await.unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Rust.gitignore", "README.md", "Go.gitignore", "Global"]);
        mock.assert_calls_async(1).await;
    }

    #[tokio::test]
    async fn list_entries_rejects_unexpected_shape() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/contents");
                then.status(200).body(r#"{"name": "not-an-array"}"#);
            })
            .await;

        let client = ApiClient::with_base_url(server.base_url()).unwrap();
        let err = client.list_entries().await.unwrap_err();
        assert!(matches!(err, Error::Decode(DecodeError::MalformedJson(_))));
    }

    #[tokio::test]
    async fn list_entries_reports_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/contents");
                then.status(403)
                    .json_body(serde_json::json!({"message": "API rate limit exceeded"}));
            })
            .await;

        let client = ApiClient::with_base_url(server.base_url()).unwrap();
        let err = client.list_entries().await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("403"));
    }

    #[tokio::test]
    async fn fetch_uses_name_verbatim_and_returns_raw_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/contents/VisualStudio.gitignore");
                then.status(200).body(r#"{"content":"Ki5leGUK"}"#);
            })
            .await;

        let client = ApiClient::with_base_url(format!("{}/", server.base_url())).unwrap();
        let body = client
            .fetch_by_exact_name("VisualStudio.gitignore")
            .await
            .unwrap();
        assert_eq!(body, br#"{"content":"Ki5leGUK"}"#.to_vec());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_returns_not_found_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/contents/Nope.gitignore");
                then.status(404).body(r#"{"message":"Not Found"}"#);
            })
            .await;

        let client = ApiClient::with_base_url(server.base_url()).unwrap();
        let body = client.fetch_by_exact_name("Nope.gitignore").await.unwrap();
        assert_eq!(body, br#"{"message":"Not Found"}"#.to_vec());
    }

    #[tokio::test]
    async fn fetch_reports_rate_limit_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/contents/Go.gitignore");
                then.status(403)
                    .json_body(serde_json::json!({"message": "API rate limit exceeded"}));
            })
            .await;

        let client = ApiClient::with_base_url(server.base_url()).unwrap();
        let err = client.fetch_by_exact_name("Go.gitignore").await.unwrap_err();
        match err {
            Error::UpstreamStatus { status, .. } => {
                assert_eq!(status, reqwest::StatusCode::FORBIDDEN)
            }
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client = ApiClient::with_base_url("http://127.0.0.1:9").unwrap();
        let err = client.list_entries().await.unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }
}
