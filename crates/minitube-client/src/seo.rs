use minitube_core::Video;
use serde::Serialize;
use serde_json::{json, Value};
use typed_builder::TypedBuilder;

pub const SITE_NAME: &str = "MiniTube";
pub const DEFAULT_TITLE: &str = "MiniTube - YouTube Clone | Watch & Share Videos";
pub const DEFAULT_DESCRIPTION: &str =
    "MiniTube - Free video sharing platform. Watch, upload and share videos with the world.";
pub const DEFAULT_KEYWORDS: &str = "videos, youtube clone, video sharing, watch videos";

/// Document metadata for a page: title, description, keywords, robots
/// directive and optional schema.org structured data.
#[derive(Debug, Clone, PartialEq, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    #[builder(default = DEFAULT_TITLE.to_string(), setter(into))]
    pub title: String,
    #[builder(default = DEFAULT_DESCRIPTION.to_string(), setter(into))]
    pub description: String,
    #[builder(default = DEFAULT_KEYWORDS.to_string(), setter(into))]
    pub keywords: String,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<Value>,
    #[builder(default)]
    pub noindex: bool,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PageMetadata {
    pub fn robots(&self) -> &'static str {
        if self.noindex {
            "noindex, follow"
        } else {
            "index, follow"
        }
    }

    /// Metadata for a video's watch page.
    pub fn for_video(video: &Video) -> Self {
        Self::builder()
            .title(format!("{} - {SITE_NAME}", video.title))
            .description(video.description.clone())
            .keywords(format!("{}, {DEFAULT_KEYWORDS}", video.title))
            .structured_data(video_structured_data(video))
            .build()
    }

    /// Metadata for a search results page. Result listings are not indexed.
    pub fn for_search(query: &str) -> Self {
        let query = query.trim();
        let title = if query.is_empty() {
            format!("Search - {SITE_NAME}")
        } else {
            format!("Search results for \"{query}\" - {SITE_NAME}")
        };

        Self::builder().title(title).noindex(true).build()
    }

    /// `og:` properties for social previews.
    pub fn open_graph(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("og:title", self.title.as_str()),
            ("og:description", self.description.as_str()),
            ("og:type", "website"),
            ("og:site_name", SITE_NAME),
        ]
    }
}

/// schema.org `VideoObject` describing `video`.
pub fn video_structured_data(video: &Video) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "VideoObject",
        "name": video.title,
        "description": video.description,
        "thumbnailUrl": video.thumbnail_url,
        "contentUrl": video.video_url,
        "uploadDate": video.upload_date.to_string(),
        "duration": format!("PT{}S", video.duration),
        "interactionCount": video.views,
    })
}
