use async_trait::async_trait;
use jiff::Timestamp;
use minitube_core::{
    NewVideo, Repository, StoreError, Video, VideoId, VideoPatch, VideoStore,
};
use minitube_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace};

/// A concrete implementation of the [`VideoStore`] trait.
///
/// This service wraps a [`Repository`] and a [`Generator`] to handle:
/// - id assignment and placeholder defaults on create
/// - view recording on fetch
/// - mapping storage failures onto the store's error taxonomy
#[derive(Debug, Clone)]
pub struct VideoService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: Repository, G: Generator> VideoService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn next_id(&self) -> VideoId {
        self.generator.generate().into()
    }
}

#[async_trait]
impl<R: Repository, G: Generator> VideoStore for VideoService<R, G> {
    async fn list_videos(&self) -> Result<Vec<Video>, StoreError> {
        let videos = self.repository.list().await?;
        trace!(count = videos.len(), "listed videos");
        Ok(videos)
    }

    async fn fetch_and_record_view(&self, id: &VideoId) -> Result<Video, StoreError> {
        match self.repository.record_view(id).await? {
            Some(video) => {
                debug!(id = %id, views = video.views, "recorded view");
                Ok(video)
            }
            None => {
                trace!(id = %id, "video not found");
                Err(StoreError::NotFound(id.clone()))
            }
        }
    }

    async fn create_video(&self, video: NewVideo) -> Result<Video, StoreError> {
        let video = video.into_video(self.next_id(), Timestamp::now())?;
        self.repository.insert(video.clone()).await?;

        debug!(id = %video.id, title = %video.title, "created video");
        Ok(video)
    }

    async fn update_video(&self, id: &VideoId, patch: VideoPatch) -> Result<Video, StoreError> {
        patch.validate()?;

        let video = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        debug!(id = %id, "updated video");
        Ok(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;
    use minitube_core::video::{DEFAULT_DURATION_SECS, DEFAULT_THUMBNAIL_URL, DEFAULT_VIDEO_URL};
    use minitube_core::ReadRepository;
    use minitube_generator::SeqGenerator;
    use minitube_storage::InMemoryRepository;

    fn test_service() -> VideoService<InMemoryRepository, SeqGenerator> {
        VideoService::new(InMemoryRepository::new(), SeqGenerator::with_prefix("vid"))
    }

    fn new_video(title: &str) -> NewVideo {
        NewVideo::builder()
            .title(title)
            .description(format!("About {title}"))
            .build()
    }

    #[tokio::test]
    async fn create_applies_defaults_and_assigns_id() {
        let service = test_service();
        let before = Timestamp::now();

        let created = service.create_video(new_video("Clip")).await.unwrap();

        let after = Timestamp::now();
        assert_eq!(created.id.as_str(), "vid000000");
        assert_eq!(created.video_url, DEFAULT_VIDEO_URL);
        assert_eq!(created.thumbnail_url, DEFAULT_THUMBNAIL_URL);
        assert_eq!(created.duration, DEFAULT_DURATION_SECS);
        assert_eq!(created.views, 0);
        assert!(created.upload_date >= before && created.upload_date <= after);
    }

    #[tokio::test]
    async fn create_persists_the_returned_record() {
        let service = test_service();

        let created = service.create_video(new_video("Clip")).await.unwrap();

        let stored = service.repository().get(&created.id).await.unwrap();
        assert_eq!(stored, Some(created));
    }

    #[tokio::test]
    async fn create_rejects_missing_title() {
        let service = test_service();

        let err = service
            .create_video(NewVideo::builder().description("x").build())
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert!(service.list_videos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_twice_adds_exactly_two_views() {
        let service = test_service();
        let created = service.create_video(new_video("Clip")).await.unwrap();

        let first = service.fetch_and_record_view(&created.id).await.unwrap();
        let second = service.fetch_and_record_view(&created.id).await.unwrap();

        assert_eq!(first.views, created.views + 1);
        assert_eq!(second.views, created.views + 2);
    }

    #[tokio::test]
    async fn fetch_missing_is_not_found_and_leaves_collection_unchanged() {
        let service = test_service();
        service.create_video(new_video("Clip")).await.unwrap();

        let missing = VideoId::new_unchecked("does-not-exist");
        let err = service.fetch_and_record_view(&missing).await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(ref id) if *id == missing));
        assert_eq!(service.list_videos().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let service = test_service();
        let now = Timestamp::now();

        for (title, hours_ago) in [("middle", 1), ("newest", 0), ("oldest", 2)] {
            let mut video = new_video(title)
                .into_video(VideoId::new_unchecked(title), now)
                .unwrap();
            video.upload_date = now - SignedDuration::from_hours(hours_ago);
            service.repository().insert(video).await.unwrap();
        }

        let listed = service.list_videos().await.unwrap();
        let titles: Vec<_> = listed.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn update_replaces_fields_without_defaulting() {
        let service = test_service();
        let created = service.create_video(new_video("Clip")).await.unwrap();

        let patch = VideoPatch::builder().video_url("").build();
        let updated = service.update_video(&created.id, patch).await.unwrap();

        assert_eq!(updated.video_url, "");
        assert_eq!(updated.title, "Clip");
        assert_eq!(updated.views, created.views);
    }

    #[tokio::test]
    async fn update_missing_and_invalid() {
        let service = test_service();
        let created = service.create_video(new_video("Clip")).await.unwrap();

        let err = service
            .update_video(&VideoId::new_unchecked("nope"), VideoPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));

        let err = service
            .update_video(&created.id, VideoPatch::builder().title("").build())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
