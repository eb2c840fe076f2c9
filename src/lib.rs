//! # RSS Reader Client Library
//!
//! This library provides a typed HTTP client for a remote RSS Reader API.
//! It issues authenticated GET requests, maps JSON responses onto typed
//! records (categories, feeds, entries, status reports), and surfaces
//! failures as a small typed error taxonomy.
//!
//! ## Client Module
//!
//! The [`client`] module holds the [`RssClient`] with all API methods, the
//! response [`types`](client::types), and the [`error`](client::error)
//! definitions.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rssreader_client::{Error, RssClient};
//!
//! # async fn example() {
//! let client = RssClient::new(
//!     "http://localhost:5000".to_string(),
//!     "my-api-key".to_string(),
//! );
//!
//! match client.get_status().await {
//!     Ok(status) => println!("{} feeds tracked", status.feeds.total),
//!     Err(Error::Authentication { .. }) => eprintln!("check your API key"),
//!     Err(e) => eprintln!("request failed: {}", e),
//! }
//! # }
//! ```

pub mod client;

pub use client::{
    Category, CategoryEntries, CategoryStats, Entry, EntryPage, EntryStats, Error, Feed,
    FeedCategory, FeedEntries, FeedStats, Pagination, Result, RssClient, SystemStatus, TaskStatus,
};
