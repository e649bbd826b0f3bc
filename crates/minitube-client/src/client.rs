use crate::error::{ClientError, Result};
use async_trait::async_trait;
use minitube_core::{NewVideo, Video, VideoId, VideoPatch};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Environment variable holding the API base url.
pub const API_URL_ENV: &str = "MINITUBE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Read access to the video catalog, as the pages need it.
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn list_videos(&self) -> Result<Vec<Video>>;

    /// Fetches one video. The store counts this as a view.
    async fn fetch_video(&self, id: &VideoId) -> Result<Video>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for the MiniTube API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ClientError::Config(format!("invalid base url '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "base url '{base_url}' cannot carry a path"
            )));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Creates a client from `MINITUBE_API_URL`, falling back to
    /// [`DEFAULT_API_URL`].
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn videos_url(&self, id: Option<&VideoId>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ClientError::Config(format!("base url '{}' cannot carry a path", self.base_url))
            })?;
            segments.pop_if_empty().push("videos");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    pub async fn list_videos(&self) -> Result<Vec<Video>> {
        let url = self.videos_url(None)?;
        self.send(self.client.get(url)).await
    }

    /// Fetches a single video, which increments its view count.
    pub async fn fetch_video(&self, id: &VideoId) -> Result<Video> {
        let url = self.videos_url(Some(id))?;
        self.send(self.client.get(url)).await
    }

    pub async fn create_video(&self, video: &NewVideo) -> Result<Video> {
        let url = self.videos_url(None)?;
        self.send(self.client.post(url).json(video)).await
    }

    pub async fn update_video(&self, id: &VideoId, patch: &VideoPatch) -> Result<Video> {
        let url = self.videos_url(Some(id))?;
        self.send(self.client.patch(url).json(patch)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(ClientError::Transport)?;
        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "api response");

        if status.is_success() {
            return response.json().await.map_err(ClientError::Decode);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(message));
        }

        warn!(status = status.as_u16(), %message, "api request failed");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl VideoSource for ApiClient {
    async fn list_videos(&self) -> Result<Vec<Video>> {
        ApiClient::list_videos(self).await
    }

    async fn fetch_video(&self, id: &VideoId) -> Result<Video> {
        ApiClient::fetch_video(self, id).await
    }
}
