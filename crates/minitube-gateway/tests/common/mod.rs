#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use minitube_core::VideoStore;
use minitube_gateway::{App, AppState};
use minitube_generator::SeqGenerator;
use minitube_service::VideoService;
use minitube_storage::InMemoryRepository;
use serde_json::Value;
use tower::ServiceExt;

pub type TestService = VideoService<InMemoryRepository, SeqGenerator>;

/// Builds a service over an empty in-memory repository with predictable ids.
pub fn test_service() -> Arc<TestService> {
    Arc::new(VideoService::new(
        InMemoryRepository::new(),
        SeqGenerator::with_prefix("vid"),
    ))
}

pub fn build_app(store: Arc<dyn VideoStore>) -> Router {
    App::router(AppState::new(store))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
