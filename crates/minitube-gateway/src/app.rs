use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_video_handler, get_video_handler, health_handler, list_videos_handler,
    update_video_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the API routes without any middleware.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/api/videos",
                get(list_videos_handler).post(create_video_handler),
            )
            .route(
                "/api/videos/{id}",
                get(get_video_handler).patch(update_video_handler),
            )
            .with_state(state)
    }

    /// Builds the routes wrapped in request tracing and CORS.
    pub fn service(state: AppState, cors: CorsLayer) -> Router {
        Self::router(state)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }
}

/// CORS policy for the browser frontend.
///
/// With no configured origins any origin may call the API; otherwise only
/// the listed ones.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = origins
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([CONTENT_TYPE]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_accepts_valid_origins() {
        assert!(cors_layer(&[]).is_ok());
        assert!(cors_layer(&["http://localhost:5173".to_string()]).is_ok());
    }

    #[test]
    fn cors_rejects_malformed_origin() {
        assert!(cors_layer(&["bad\norigin".to_string()]).is_err());
    }
}
