//! News search and image fetch client

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::NewsError;
use crate::Result;

const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// Page-size ceiling. Slightly more than one screen of results so the
/// UI can deduplicate and filter client-side.
const PAGE_SIZE: u32 = 15;
const LANGUAGE: &str = "en";
const SORT_BY: &str = "publishedAt";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub published_at: Option<String>,
    pub content: Option<String>,
}

#[derive(Clone)]
pub struct NewsClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl NewsClient {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string(), api_key)
    }

    pub fn with_endpoint(endpoint: String, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent("Scribe/0.1")
            .build()
            .map_err(|e| NewsError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Search articles, most recent first, English only.
    ///
    /// `category_hint` is carried for client-side filtering and logging;
    /// the upstream query is keyword-only.
    pub async fn search(&self, query: &str, category_hint: &str) -> Result<Vec<Article>> {
        let api_key = self.api_key.as_deref().ok_or(NewsError::MissingApiKey)?;

        tracing::info!(query, category_hint, "Searching articles");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("apiKey", api_key),
                ("language", LANGUAGE),
                ("sortBy", SORT_BY),
                ("pageSize", &PAGE_SIZE.to_string()),
            ])
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| NewsError::NoResponse(e.to_string()))?;

        interpret_search_response(status, &body)
    }

    /// Fetch an image and re-encode it as a data URI.
    ///
    /// Never fails: any transport, status, or header problem collapses
    /// to `None` so callers can fall back to a placeholder.
    pub async fn fetch_image(&self, image_url: &str) -> Option<String> {
        let parsed = url::Url::parse(image_url).ok()?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return None;
        }

        let response = self.client.get(parsed).send().await.ok()?;
        if !response.status().is_success() {
            tracing::debug!(url = image_url, status = %response.status(), "Image fetch failed");
            return None;
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)?
            .to_str()
            .ok()?
            .to_string();

        let bytes = response.bytes().await.ok()?;
        Some(build_data_uri(&mime, &bytes))
    }
}

fn build_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

fn classify_send_error(e: reqwest::Error) -> NewsError {
    if e.is_timeout() || e.is_connect() {
        NewsError::NoResponse(e.to_string())
    } else if e.is_builder() {
        NewsError::Request(e.to_string())
    } else {
        NewsError::NoResponse(e.to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
struct SearchBody {
    status: Option<String>,
    message: Option<String>,
    articles: Option<Vec<Article>>,
}

fn interpret_search_response(status: u16, body: &str) -> Result<Vec<Article>> {
    let parsed: SearchBody = serde_json::from_str(body).unwrap_or_default();

    if !(200..300).contains(&status) {
        let message = parsed
            .message
            .unwrap_or_else(|| "Upstream request failed".to_string());
        return Err(NewsError::Upstream { status, message });
    }

    match parsed.status.as_deref() {
        Some("ok") => Ok(parsed.articles.unwrap_or_default()),
        _ => Err(NewsError::UpstreamPayload(parsed.message.unwrap_or_else(
            || "Received non-ok status from the news service".to_string(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_ok_payload() {
        let body = r#"{"status":"ok","articles":[{"title":"Rust 2.0","url":"https://example.com"}]}"#;
        let articles = interpret_search_response(200, body).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title.as_deref(), Some("Rust 2.0"));
    }

    #[test]
    fn test_interpret_non_ok_payload() {
        let body = r#"{"status":"error","message":"parameter q is required"}"#;
        let err = interpret_search_response(200, body).unwrap_err();
        match err {
            NewsError::UpstreamPayload(msg) => assert_eq!(msg, "parameter q is required"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_interpret_http_failure_carries_status_and_message() {
        let body = r#"{"status":"error","message":"apiKey invalid"}"#;
        let err = interpret_search_response(401, body).unwrap_err();
        match err {
            NewsError::Upstream { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "apiKey invalid");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_interpret_http_failure_with_garbage_body() {
        let err = interpret_search_response(502, "<html>bad gateway</html>").unwrap_err();
        match err {
            NewsError::Upstream { status, .. } => assert_eq!(status, 502),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_data_uri() {
        let uri = build_data_uri("image/png", &[0x89, 0x50, 0x4e, 0x47]);
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[tokio::test]
    async fn test_search_without_key_is_config_error_before_io() {
        // Endpoint points nowhere; the key check must short-circuit first.
        let client =
            NewsClient::with_endpoint("http://127.0.0.1:1/everything".to_string(), None).unwrap();
        let err = client.search("rust", "tech").await.unwrap_err();
        assert!(matches!(err, NewsError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_fetch_image_unreachable_returns_none() {
        let client = NewsClient::new(None).unwrap();
        assert!(client.fetch_image("http://127.0.0.1:1/pic.png").await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_image_rejects_non_http_schemes() {
        let client = NewsClient::new(None).unwrap();
        assert!(client.fetch_image("file:///etc/passwd").await.is_none());
        assert!(client.fetch_image("not a url").await.is_none());
    }
}
