use crate::error::StorageError;
use crate::video::{Video, VideoId, VideoPatch};
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Returns every stored video, most recently uploaded first.
    async fn list(&self) -> Result<Vec<Video>>;

    /// Retrieves a video without touching its view counter.
    /// Returns `None` if the id does not exist.
    async fn get(&self, id: &VideoId) -> Result<Option<Video>>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Inserts a new video. Returns `Err(Conflict)` if the id already exists.
    async fn insert(&self, video: Video) -> Result<()>;

    /// Atomically increments the view counter of a video by one and returns
    /// the post-increment record. Returns `None` if the id does not exist.
    async fn record_view(&self, id: &VideoId) -> Result<Option<Video>>;

    /// Applies a partial update and returns the updated record.
    /// Returns `None` if the id does not exist.
    async fn update(&self, id: &VideoId, patch: VideoPatch) -> Result<Option<Video>>;

    /// Deletes a video.
    /// Returns `true` if the record existed and was removed.
    async fn delete(&self, id: &VideoId) -> Result<bool>;
}
