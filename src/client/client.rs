use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::{
    error::{Error, Result},
    types::*,
};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 50;

/// Client for the RSS Reader API.
///
/// Holds the base URL and API key plus the configurable parts of the server
/// contract: the API path prefix, the header carrying the key, the statuses
/// treated as authentication failures, and an optional request timeout.
/// The client has no mutable state, so one instance can be shared freely
/// across call sites.
pub struct RssClient {
    base_url: String,
    api_base_path: String,
    api_key: String,
    auth_header: String,
    auth_error_codes: Vec<u16>,
    timeout: Option<Duration>,
    client: Client,
}

impl RssClient {
    /// Creates a client for the server at `base_url`, authenticating every
    /// request with `api_key`. Trailing slashes on the URL are ignored.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_base_path: "/api".to_string(),
            api_key,
            auth_header: "X-API-Key".to_string(),
            auth_error_codes: vec![401, 403],
            timeout: None,
            client: Client::new(),
        }
    }

    /// Overrides the path prefix for API endpoints (default `/api`).
    pub fn with_api_base_path(mut self, path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        self.api_base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        self
    }

    /// Overrides the header name carrying the API key (default `X-API-Key`).
    pub fn with_auth_header(mut self, name: &str) -> Self {
        self.auth_header = name.to_string();
        self
    }

    /// Overrides which HTTP statuses map to [`Error::Authentication`]
    /// (default 401 and 403).
    pub fn with_auth_error_codes(mut self, codes: &[u16]) -> Self {
        self.auth_error_codes = codes.to_vec();
        self
    }

    /// Sets a per-request timeout. Without one the transport default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    // Category and feed operations

    /// Fetches all categories, in server-returned order.
    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        self.get_json("categories", &[]).await
    }

    /// Fetches all feeds, optionally filtered to one category. The server
    /// performs the filtering.
    pub async fn get_feeds(&self, category_id: Option<i64>) -> Result<Vec<Feed>> {
        let mut params = vec![];
        if let Some(category) = category_id {
            params.push(format!("category_id={}", category));
        }
        self.get_json("feeds", &params).await
    }

    // Entry operations

    /// Fetches one page of entries. `page` defaults to 1 and `per_page` to
    /// 50; the category and feed filters may be combined or omitted.
    pub async fn get_entries(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
        category_id: Option<i64>,
        feed_id: Option<i64>,
    ) -> Result<EntryPage> {
        let mut params = vec![
            format!("page={}", page.unwrap_or(DEFAULT_PAGE)),
            format!("per_page={}", per_page.unwrap_or(DEFAULT_PER_PAGE)),
        ];
        if let Some(category) = category_id {
            params.push(format!("category_id={}", category));
        }
        if let Some(feed) = feed_id {
            params.push(format!("feed_id={}", feed));
        }
        self.get_json("entries", &params).await
    }

    /// Fetches one page of entries scoped to a category. The response echoes
    /// the category alongside the entries.
    pub async fn get_category_entries(
        &self,
        category_id: i64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<CategoryEntries> {
        let params = vec![
            format!("page={}", page.unwrap_or(DEFAULT_PAGE)),
            format!("per_page={}", per_page.unwrap_or(DEFAULT_PER_PAGE)),
        ];
        self.get_json(&format!("categories/{}/entries", category_id), &params)
            .await
    }

    /// Fetches one page of entries scoped to a feed. The response echoes the
    /// feed alongside the entries.
    pub async fn get_feed_entries(
        &self,
        feed_id: i64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<FeedEntries> {
        let params = vec![
            format!("page={}", page.unwrap_or(DEFAULT_PAGE)),
            format!("per_page={}", per_page.unwrap_or(DEFAULT_PER_PAGE)),
        ];
        self.get_json(&format!("feeds/{}/entries", feed_id), &params)
            .await
    }

    /// Fetches a single entry including its full content field, which list
    /// endpoints may omit.
    pub async fn get_entry(&self, entry_id: i64) -> Result<Entry> {
        self.get_json(&format!("entries/{}", entry_id), &[]).await
    }

    // Status operations

    /// Fetches the server health report.
    pub async fn get_status(&self) -> Result<SystemStatus> {
        self.get_json("status", &[]).await
    }

    /// Fetches the state of the server's background feed-refresh tasks.
    pub async fn get_task_status(&self) -> Result<TaskStatus> {
        self.get_json("task_status", &[]).await
    }

    /// Issues one authenticated GET and maps the outcome onto the error
    /// taxonomy: transport failures, auth rejections, other non-2xx
    /// statuses, and undecodable bodies each get their own variant.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, params: &[String]) -> Result<T> {
        let mut url = format!("{}{}/{}", self.base_url, self.api_base_path, endpoint);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }

        tracing::debug!("GET {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(self.auth_header.as_str(), self.api_key.as_str());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Network error requesting {}: {}", url, e);
            Error::Connection(e)
        })?;

        let status = response.status();
        tracing::debug!("{} responded with status {}", endpoint, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Request to {} failed with status {}: {}", endpoint, status, body);

            if self.auth_error_codes.contains(&status.as_u16()) {
                return Err(Error::Authentication {
                    status: status.as_u16(),
                    message: error_message(&body).unwrap_or_else(|| {
                        "Invalid API key or authentication required".to_string()
                    }),
                });
            }
            return Err(Error::Api {
                status: status.as_u16(),
                message: error_message(&body)
                    .unwrap_or_else(|| format!("HTTP error {}", status.as_u16())),
            });
        }

        let body = response.text().await.map_err(Error::Connection)?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse {} response: {}", endpoint, e);
            Error::Decode(e)
        })
    }
}

/// Pulls a human-readable message out of an error body. The server reports
/// failures as `{"error": "..."}`; some deployments use `message` instead.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "message"] {
        if let Some(message) = value.get(key).and_then(serde_json::Value::as_str) {
            return Some(message.to_string());
        }
    }
    None
}
