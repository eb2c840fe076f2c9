//! Type definitions for the RSS Reader API.
//!
//! This module contains the data structures deserialized from RSS Reader API
//! responses: categories, feeds, entries, pagination metadata, and the two
//! status reports.
//!
//! ## Key Types
//!
//! - [`Category`] - A named grouping of feeds with a server-computed count
//! - [`Feed`] - A single RSS/Atom source tracked by the server
//! - [`Entry`] - One article/item belonging to a feed
//! - [`EntryPage`] - List response wrapper pairing entries with [`Pagination`]
//! - [`SystemStatus`] / [`TaskStatus`] - Server health and background-task reports
//!
//! ## Deserialization
//!
//! The server omits or nulls fields freely depending on the endpoint (list
//! endpoints drop entry content, scoped endpoints echo their parent
//! resource). Every field here tolerates both: missing and `null` values
//! deserialize to a default or `None` rather than failing the whole payload.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Treats an explicit JSON `null` like an absent field, falling back to the
/// type's default instead of rejecting the payload.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    50
}

fn default_pages() -> u32 {
    1
}

// Null-tolerant variants for fields whose default is not the type default.

fn null_default_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_page))
}

fn null_default_per_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_per_page))
}

fn null_default_pages<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_pages))
}

/// A named grouping of feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    /// Category display title
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    /// Number of feeds in this category (server-computed, read-only)
    #[serde(default, deserialize_with = "null_default")]
    pub feed_count: i64,
}

/// Category summary embedded in a [`Feed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedCategory {
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
}

/// A single RSS/Atom source tracked by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    /// Unique feed identifier
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    /// Feed display title
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    /// Website the feed belongs to
    #[serde(default)]
    pub site_url: Option<String>,
    /// URL the server polls for new entries
    #[serde(default, deserialize_with = "null_default")]
    pub feed_url: String,
    /// Category this feed is filed under
    #[serde(default)]
    pub category: Option<FeedCategory>,
    /// When the server last polled this feed
    #[serde(default)]
    pub checked_at: Option<String>,
    /// Whether polling is disabled for this feed
    #[serde(default, deserialize_with = "null_default")]
    pub disabled: bool,
    /// Consecutive polling failures recorded by the server
    #[serde(default, deserialize_with = "null_default")]
    pub parsing_error_count: i64,
    /// Number of entries stored for this feed
    #[serde(default, deserialize_with = "null_default")]
    pub entry_count: i64,
}

/// One article/item belonging to a feed.
///
/// List endpoints may omit `content` to keep payloads small; fetch the entry
/// individually with [`RssClient::get_entry`](crate::RssClient::get_entry)
/// to get the full article body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Unique entry identifier
    #[serde(default, deserialize_with = "null_default")]
    pub id: i64,
    /// Feed this entry belongs to
    #[serde(default, deserialize_with = "null_default")]
    pub feed_id: i64,
    /// Entry title
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    /// Link to the original article
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
    /// Publication timestamp as reported by the feed (ISO-8601 string)
    #[serde(default)]
    pub published_at: Option<String>,
    /// When the server first stored this entry
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: String,
    /// Article author, when the feed provides one
    #[serde(default)]
    pub author: Option<String>,
    /// Feed summary fields as returned by the server (shape varies by endpoint)
    #[serde(default, deserialize_with = "null_default")]
    pub feed: serde_json::Map<String, serde_json::Value>,
    /// Full article body; omitted by list endpoints
    #[serde(default)]
    pub content: Option<String>,
    /// Media attachments (enclosures) reported by the feed
    #[serde(default)]
    pub media: Option<Vec<serde_json::Value>>,
}

impl Entry {
    /// Parses `published_at` into a structured timestamp.
    ///
    /// Accepts RFC 3339 (including a trailing `Z`) and offset-less ISO-8601
    /// timestamps, which are taken as UTC. Returns `None` when the field is
    /// missing or unparseable, so callers can filter entries with a plain
    /// `is_some()` check.
    pub fn published_datetime(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.published_at.as_deref()?;
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed);
        }
        raw.parse::<NaiveDateTime>()
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    }
}

/// Page/per-page/total metadata accompanying list results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based)
    #[serde(default = "default_page", deserialize_with = "null_default_page")]
    pub page: u32,
    /// Entries per page
    #[serde(default = "default_per_page", deserialize_with = "null_default_per_page")]
    pub per_page: u32,
    /// Total entries across all pages
    #[serde(default, deserialize_with = "null_default")]
    pub total: u64,
    /// Total number of pages
    #[serde(default = "default_pages", deserialize_with = "null_default_pages")]
    pub pages: u32,
    /// Whether a next page exists
    #[serde(default, deserialize_with = "null_default")]
    pub has_next: bool,
    /// Whether a previous page exists
    #[serde(default, deserialize_with = "null_default")]
    pub has_prev: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            total: 0,
            pages: default_pages(),
            has_next: false,
            has_prev: false,
        }
    }
}

/// Response from the paginated entries endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryPage {
    /// Entries for the current page, in server-returned order
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Response from the category-scoped entries endpoint, echoing the category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntries {
    /// The category the entries were scoped to, when the server echoes it
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Response from the feed-scoped entries endpoint, echoing the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntries {
    /// The feed the entries were scoped to, when the server echoes it
    #[serde(default)]
    pub feed: Option<Feed>,
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Aggregate counts reported under `feeds` in the status payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedStats {
    #[serde(default, deserialize_with = "null_default")]
    pub total: i64,
    /// Most recent feed poll timestamp
    #[serde(default)]
    pub latest_checked: Option<String>,
}

/// Aggregate counts reported under `categories` in the status payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    #[serde(default, deserialize_with = "null_default")]
    pub total: i64,
}

/// Aggregate counts reported under `entries` in the status payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryStats {
    #[serde(default, deserialize_with = "null_default")]
    pub total: i64,
    /// Timestamp of the most recently stored entry
    #[serde(default)]
    pub latest: Option<String>,
}

/// Server health report from the status endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemStatus {
    #[serde(default)]
    pub feeds: FeedStats,
    #[serde(default)]
    pub categories: CategoryStats,
    #[serde(default)]
    pub entries: EntryStats,
    /// Server feed-refresh interval in minutes
    #[serde(default, deserialize_with = "null_default")]
    pub update_interval: i64,
}

/// Background-task report from the task-status endpoint.
///
/// The server returns a flat map keyed by task name: `all_feeds` for the
/// global refresh task plus one `feed_<id>` key per feed-specific task.
/// A custom deserializer folds that map into typed fields, skipping keys
/// that match neither shape.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskStatus {
    /// Per-feed task state, keyed by feed id; `true` means running
    pub feed_tasks: BTreeMap<i64, bool>,
    /// Whether the global all-feeds refresh task is running
    pub all_feeds_running: bool,
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;

        let mut feed_tasks = BTreeMap::new();
        let mut all_feeds_running = false;

        for (key, task) in raw {
            let running = task
                .get("running")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(false);

            if key == "all_feeds" {
                all_feeds_running = running;
            } else if let Some(id) = key
                .strip_prefix("feed_")
                .and_then(|suffix| suffix.split('_').next())
                .and_then(|first| first.parse::<i64>().ok())
            {
                feed_tasks.insert(id, running);
            }
        }

        Ok(TaskStatus {
            feed_tasks,
            all_feeds_running,
        })
    }
}
