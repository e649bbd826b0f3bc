use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use minitube_core::repository::{ReadRepository, Repository, Result};
use minitube_core::{StorageError, Video, VideoId, VideoPatch};

/// In-memory implementation of the repository contract using DashMap.
///
/// Each mutation holds the write guard of the entry's shard for its whole
/// read-modify-write, so concurrent view increments on one video never
/// lose updates.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<VideoId, Video>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored videos.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn list(&self) -> Result<Vec<Video>> {
        let mut videos: Vec<Video> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        videos.sort_by(Video::newest_first);
        Ok(videos)
    }

    async fn get(&self, id: &VideoId) -> Result<Option<Video>> {
        Ok(self.storage.get(id).map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, video: Video) -> Result<()> {
        match self.storage.entry(video.id.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(video.id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(video);
                Ok(())
            }
        }
    }

    async fn record_view(&self, id: &VideoId) -> Result<Option<Video>> {
        let Some(mut entry) = self.storage.get_mut(id) else {
            return Ok(None);
        };

        entry.views = entry.views.checked_add(1).ok_or_else(|| {
            StorageError::InvalidData(format!("view counter overflow for video {id}"))
        })?;

        Ok(Some(entry.clone()))
    }

    async fn update(&self, id: &VideoId, patch: VideoPatch) -> Result<Option<Video>> {
        let Some(mut entry) = self.storage.get_mut(id) else {
            return Ok(None);
        };

        patch.apply_to(&mut entry);
        Ok(Some(entry.clone()))
    }

    async fn delete(&self, id: &VideoId) -> Result<bool> {
        Ok(self.storage.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::{SignedDuration, Timestamp};
    use std::sync::Arc;

    fn id(s: &str) -> VideoId {
        VideoId::new_unchecked(s)
    }

    fn video(id_str: &str, upload_date: Timestamp) -> Video {
        Video {
            id: id(id_str),
            title: format!("Video {id_str}"),
            description: "a description".to_string(),
            video_url: "https://example.com/v.mp4".to_string(),
            thumbnail_url: "https://example.com/v.jpg".to_string(),
            duration: 60,
            views: 0,
            upload_date,
        }
    }

    #[tokio::test]
    async fn insert_and_get() {
        let repo = InMemoryRepository::new();
        let now = Timestamp::now();

        repo.insert(video("abc123", now)).await.unwrap();

        let got = repo.get(&id("abc123")).await.unwrap().unwrap();
        assert_eq!(got.title, "Video abc123");
        assert_eq!(got.upload_date, now);
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let repo = InMemoryRepository::new();

        assert!(repo.get(&id("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_conflict() {
        let repo = InMemoryRepository::new();
        let now = Timestamp::now();

        repo.insert(video("abc123", now)).await.unwrap();
        let err = repo.insert(video("abc123", now)).await.unwrap_err();

        assert!(matches!(err, StorageError::Conflict(_)));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let repo = InMemoryRepository::new();
        let now = Timestamp::now();

        repo.insert(video("old", now - SignedDuration::from_hours(2)))
            .await
            .unwrap();
        repo.insert(video("new", now)).await.unwrap();
        repo.insert(video("mid", now - SignedDuration::from_hours(1)))
            .await
            .unwrap();

        let listed = repo.list().await.unwrap();
        let ids: Vec<_> = listed.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn record_view_increments_by_one() {
        let repo = InMemoryRepository::new();
        repo.insert(video("abc123", Timestamp::now())).await.unwrap();

        let first = repo.record_view(&id("abc123")).await.unwrap().unwrap();
        let second = repo.record_view(&id("abc123")).await.unwrap().unwrap();

        assert_eq!(first.views, 1);
        assert_eq!(second.views, 2);
        assert_eq!(repo.get(&id("abc123")).await.unwrap().unwrap().views, 2);
    }

    #[tokio::test]
    async fn record_view_nonexistent() {
        let repo = InMemoryRepository::new();

        assert!(repo.record_view(&id("nope")).await.unwrap().is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn update_applies_patch() {
        let repo = InMemoryRepository::new();
        repo.insert(video("abc123", Timestamp::now())).await.unwrap();

        let patch = VideoPatch::builder().title("Renamed").build();
        let updated = repo.update(&id("abc123"), patch).await.unwrap().unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, "a description");
        assert!(repo
            .update(&id("nope"), VideoPatch::default())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn delete_existing_and_nonexistent() {
        let repo = InMemoryRepository::new();
        repo.insert(video("abc123", Timestamp::now())).await.unwrap();

        assert!(repo.delete(&id("abc123")).await.unwrap());
        assert!(!repo.delete(&id("abc123")).await.unwrap());
        assert!(repo.get(&id("abc123")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn concurrent_views_are_not_lost() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.insert(video("hot", Timestamp::now())).await.unwrap();

        let mut handles = vec![];
        for _ in 0..50 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.record_view(&VideoId::new_unchecked("hot"))
                    .await
                    .unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        let got = repo.get(&id("hot")).await.unwrap().unwrap();
        assert_eq!(got.views, 50);
    }
}
