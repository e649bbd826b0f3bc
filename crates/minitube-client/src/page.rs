use crate::client::VideoSource;
use crate::search::filter_by_query;
use crate::seo::PageMetadata;
use minitube_core::{Video, VideoId};
use tracing::warn;

/// Lifecycle of a page's data: `Loading` until the fetch settles, then
/// `Ready` or `Failed` with a message for the user. Failures are not retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The catalog as shown on the home and search pages.
///
/// The list is fetched once and kept; searches run against the local copy
/// until the next [`refresh`](CatalogPage::refresh).
#[derive(Debug, Clone)]
pub struct CatalogPage {
    state: PageState<Vec<Video>>,
}

impl Default for CatalogPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogPage {
    pub fn new() -> Self {
        Self {
            state: PageState::Loading,
        }
    }

    /// Creates a page and performs its initial fetch.
    pub async fn load<S: VideoSource + ?Sized>(source: &S) -> Self {
        let mut page = Self::new();
        page.refresh(source).await;
        page
    }

    pub async fn refresh<S: VideoSource + ?Sized>(&mut self, source: &S) {
        self.state = PageState::Loading;
        self.state = match source.list_videos().await {
            Ok(videos) => PageState::Ready(videos),
            Err(err) => {
                warn!(error = %err, "failed to load videos");
                PageState::Failed("Failed to load videos. Please try again later.".to_string())
            }
        };
    }

    pub fn state(&self) -> &PageState<Vec<Video>> {
        &self.state
    }

    /// The loaded videos, or nothing while loading or after a failure.
    pub fn videos(&self) -> &[Video] {
        self.state.ready().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn search(&self, query: &str) -> Vec<&Video> {
        filter_by_query(self.videos(), query)
    }
}

/// A single video as shown on its watch page.
#[derive(Debug, Clone)]
pub struct WatchPage {
    id: VideoId,
    state: PageState<Video>,
}

impl WatchPage {
    pub fn new(id: VideoId) -> Self {
        Self {
            id,
            state: PageState::Loading,
        }
    }

    /// Creates a page and fetches the video, which records one view.
    pub async fn load<S: VideoSource + ?Sized>(source: &S, id: VideoId) -> Self {
        let mut page = Self::new(id);
        page.refresh(source).await;
        page
    }

    pub async fn refresh<S: VideoSource + ?Sized>(&mut self, source: &S) {
        self.state = PageState::Loading;
        self.state = match source.fetch_video(&self.id).await {
            Ok(video) => PageState::Ready(video),
            Err(err) => {
                warn!(id = %self.id, error = %err, "failed to load video");
                PageState::Failed("Failed to load video. Please try again later.".to_string())
            }
        };
    }

    pub fn id(&self) -> &VideoId {
        &self.id
    }

    pub fn state(&self) -> &PageState<Video> {
        &self.state
    }

    pub fn video(&self) -> Option<&Video> {
        self.state.ready()
    }

    /// Video-specific metadata once loaded, the site defaults otherwise.
    pub fn metadata(&self) -> PageMetadata {
        self.video()
            .map(PageMetadata::for_video)
            .unwrap_or_default()
    }
}
