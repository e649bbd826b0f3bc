//! Consumer side of the MiniTube video API.
//!
//! Provides an HTTP [`ApiClient`], the local [`filter_by_query`] search,
//! owned page state for the catalog and watch views, and the presentation
//! helpers those views share.

pub mod client;
pub mod error;
pub mod format;
pub mod page;
pub mod search;
pub mod seo;

pub use client::{ApiClient, VideoSource, API_URL_ENV, DEFAULT_API_URL};
pub use error::{ClientError, Result};
pub use format::{format_duration, format_views};
pub use page::{CatalogPage, PageState, WatchPage};
pub use search::filter_by_query;
pub use seo::{video_structured_data, PageMetadata};
