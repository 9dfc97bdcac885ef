//! HTTP handlers for video endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::domain::content::Video;
use crate::domain::foundation::{DomainError, Timestamp, VideoId};
use crate::ports::VideoUpdate;

use super::super::auth::MessageResponse;
use super::super::error::ApiError;
use super::super::middleware::RequireAdmin;
use super::super::router::AppState;
use super::dto::{VideoRequest, VideoResponse};

/// GET /api/youtube
pub async fn list_videos(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let videos = state.videos.list().await?;
    let response: Vec<VideoResponse> = videos.into_iter().map(VideoResponse::from).collect();
    Ok(Json(response))
}

/// POST /api/youtube (admin)
pub async fn create_video(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<VideoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.title.trim().is_empty() || request.url.trim().is_empty() {
        return Err(DomainError::validation("title", "Title and URL are required").into());
    }

    let video = Video::new(
        request.title,
        request.url,
        request.description,
        Timestamp::now(),
    );
    state.videos.create(&video).await?;

    Ok((StatusCode::CREATED, Json(VideoResponse::from(video))))
}

/// PUT /api/youtube/:id (admin)
pub async fn update_video(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<VideoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let non_empty = |s: String| if s.trim().is_empty() { None } else { Some(s) };

    let video = state
        .videos
        .update(
            &VideoId::from_uuid(id),
            VideoUpdate {
                title: non_empty(request.title),
                url: non_empty(request.url),
                description: non_empty(request.description),
            },
            Timestamp::now(),
        )
        .await?;

    Ok(Json(VideoResponse::from(video)))
}

/// DELETE /api/youtube/:id (admin)
pub async fn delete_video(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.videos.delete(&VideoId::from_uuid(id)).await?;
    Ok(Json(MessageResponse::new("Video deleted")))
}
