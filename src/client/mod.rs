//! # RSS Reader HTTP Client
//!
//! This module provides the HTTP client for the RSS Reader API, covering
//! categories, feeds, paginated entries, and the server's status reports.
//!
//! ## Modules
//!
//! - [`client`] - Main HTTP client implementation with all API methods
//! - [`types`] - Type definitions for API responses
//! - [`error`] - Typed errors distinguishing transport, authentication,
//!   server, and decoding failures
//!
//! ## Quick Start
//!
//! ```no_run
//! use rssreader_client::RssClient;
//!
//! # async fn example() -> rssreader_client::Result<()> {
//! let client = RssClient::new(
//!     "http://localhost:5000".to_string(),
//!     "my-api-key".to_string(),
//! );
//!
//! // List categories
//! let categories = client.get_categories().await?;
//! println!("Found {} categories", categories.len());
//!
//! // Page through entries in one feed
//! let page = client.get_entries(Some(2), Some(10), None, Some(42)).await?;
//! println!("Page {} of {}", page.pagination.page, page.pagination.pages);
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod error;
pub mod types;

pub use client::RssClient;
pub use error::{Error, Result};
pub use types::*;
