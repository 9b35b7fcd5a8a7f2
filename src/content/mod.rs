//! Content module for VitalSense
//!
//! Paged access to the hosted CMS collections that back the content pages
//! (app features, health resources).
//!
//! # Architecture
//!
//! - `records` - Typed record shapes per CMS collection
//! - `client` - The `RecordSource` collaborator trait and its HTTP-backed
//!   `CmsClient` implementation
//! - `loader` - `PagedLoader`, the accumulating load-more state machine
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vitalsense::content::{CmsClient, Feature, PagedLoader};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = CmsClient::from_env()?;
//! let mut features: PagedLoader<Feature> = PagedLoader::new(Arc::new(client), 6);
//! features.reset().await;
//! if features.has_next() {
//!     features.load_more().await;
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod loader;
mod records;

pub use client::{CmsClient, FetchError, FetchResult, Page, PageWindow, RecordSource, fetch_leading};
pub use loader::{FetchTicket, PagedLoader};
pub use records::{Article, Collection, Feature};
