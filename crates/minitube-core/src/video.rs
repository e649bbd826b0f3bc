use crate::error::StoreError;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;
use typed_builder::TypedBuilder;

/// Placeholder media used when a video is created without a `videoUrl`.
pub const DEFAULT_VIDEO_URL: &str = "https://example.com/sample-video.mp4";
/// Placeholder image used when a video is created without a `thumbnailUrl`.
pub const DEFAULT_THUMBNAIL_URL: &str = "https://via.placeholder.com/320x180";
/// Duration in seconds used when a video is created without one.
pub const DEFAULT_DURATION_SECS: u64 = 120;

/// An opaque, store-assigned video identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wraps an identifier without validation.
    ///
    /// Identifiers are opaque to everything but the generator that minted
    /// them, so any string read back from storage or a request path is
    /// accepted as-is.
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for VideoId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A stored video record.
///
/// Serializes to the public JSON shape
/// `{_id, title, description, videoUrl, thumbnailUrl, duration, views, uploadDate}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    /// Length in seconds.
    pub duration: u64,
    pub views: u64,
    pub upload_date: Timestamp,
}

impl Video {
    /// Orders videos most recent first, breaking ties by identifier
    /// (descending) so listings are deterministic.
    pub fn newest_first(a: &Video, b: &Video) -> Ordering {
        b.upload_date
            .cmp(&a.upload_date)
            .then_with(|| b.id.cmp(&a.id))
    }
}

/// Input for creating a video.
///
/// Every field is optional on the wire; [`NewVideo::into_video`] decides
/// which are required and which fall back to placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl NewVideo {
    /// Builds the record to persist.
    ///
    /// `title` must be present and not blank, `description` must be present
    /// (it may be empty). Missing or empty `videoUrl`/`thumbnailUrl` and a
    /// missing or zero `duration` take their placeholder values. `views`
    /// always starts at zero and `upload_date` is the given creation time.
    pub fn into_video(self, id: VideoId, upload_date: Timestamp) -> Result<Video, StoreError> {
        let title = match self.title {
            Some(title) if !title.trim().is_empty() => title,
            Some(_) => return Err(StoreError::Validation("title must not be blank".into())),
            None => return Err(StoreError::Validation("title is required".into())),
        };
        let description = self
            .description
            .ok_or_else(|| StoreError::Validation("description is required".into()))?;

        Ok(Video {
            id,
            title,
            description,
            video_url: non_empty_or(self.video_url, DEFAULT_VIDEO_URL),
            thumbnail_url: non_empty_or(self.thumbnail_url, DEFAULT_THUMBNAIL_URL),
            duration: self
                .duration
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_DURATION_SECS),
            views: 0,
            upload_date,
        })
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// A partial update of a video's content fields.
///
/// `_id`, `views` and `uploadDate` are not client-writable; unknown fields
/// in a request body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct VideoPatch {
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl VideoPatch {
    /// Rejects a patch that would leave the video with a blank title.
    pub fn validate(&self) -> Result<(), StoreError> {
        match &self.title {
            Some(title) if title.trim().is_empty() => {
                Err(StoreError::Validation("title must not be blank".into()))
            }
            _ => Ok(()),
        }
    }

    /// Replaces the supplied fields on `video`, leaving the rest untouched.
    pub fn apply_to(self, video: &mut Video) {
        if let Some(title) = self.title {
            video.title = title;
        }
        if let Some(description) = self.description {
            video.description = description;
        }
        if let Some(video_url) = self.video_url {
            video.video_url = video_url;
        }
        if let Some(thumbnail_url) = self.thumbnail_url {
            video.thumbnail_url = thumbnail_url;
        }
        if let Some(duration) = self.duration {
            video.duration = duration;
        }
    }
}
