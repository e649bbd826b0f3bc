//! HTTP gateway exposing the video store as a REST/JSON API.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::{AppError, Operation};
pub use state::AppState;
