use crate::error::StoreError;
use crate::video::{NewVideo, Video, VideoId, VideoPatch};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, StoreError>;

/// The operations the video store exposes to its callers.
#[async_trait]
pub trait VideoStore: Send + Sync + 'static {
    /// Lists every video, most recently uploaded first.
    async fn list_videos(&self) -> Result<Vec<Video>>;

    /// Fetches a video and records one view against it.
    ///
    /// Every successful call increments `views` by exactly one before the
    /// record is returned, so the returned value already counts this view.
    async fn fetch_and_record_view(&self, id: &VideoId) -> Result<Video>;

    /// Creates a video, assigning its id, upload date and placeholder
    /// values for omitted media fields.
    async fn create_video(&self, video: NewVideo) -> Result<Video>;

    /// Replaces the supplied content fields of a video.
    async fn update_video(&self, id: &VideoId, patch: VideoPatch) -> Result<Video>;
}
