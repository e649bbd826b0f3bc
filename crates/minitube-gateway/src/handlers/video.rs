use crate::error::{AppError, Operation, Result};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use minitube_core::{NewVideo, Video, VideoId, VideoPatch};

pub async fn list_videos_handler(State(state): State<AppState>) -> Result<Json<Vec<Video>>> {
    let videos = state
        .store()
        .list_videos()
        .await
        .map_err(AppError::during(Operation::ListVideos))?;
    Ok(Json(videos))
}

/// Returns the video with one more view recorded against it.
pub async fn get_video_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Video>> {
    let video = state
        .store()
        .fetch_and_record_view(&VideoId::from(id))
        .await
        .map_err(AppError::during(Operation::GetVideo))?;
    Ok(Json(video))
}

pub async fn create_video_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<NewVideo>, JsonRejection>,
) -> Result<(StatusCode, Json<Video>)> {
    let Json(request) = request.map_err(AppError::rejected(Operation::CreateVideo))?;
    let video = state
        .store()
        .create_video(request)
        .await
        .map_err(AppError::during(Operation::CreateVideo))?;
    Ok((StatusCode::CREATED, Json(video)))
}

pub async fn update_video_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    patch: std::result::Result<Json<VideoPatch>, JsonRejection>,
) -> Result<Json<Video>> {
    let Json(patch) = patch.map_err(AppError::rejected(Operation::UpdateVideo))?;
    let video = state
        .store()
        .update_video(&VideoId::from(id), patch)
        .await
        .map_err(AppError::during(Operation::UpdateVideo))?;
    Ok(Json(video))
}
