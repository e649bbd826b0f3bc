use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The API answered 404 for the requested video.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Decode(#[source] reqwest::Error),
}
