//! HTTP handlers for media endpoints.

use axum::extract::{Json, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::domain::content::MediaItem;
use crate::domain::foundation::{DomainError, ErrorCode, MediaId, Timestamp};

use super::super::error::ApiError;
use super::super::router::AppState;
use super::dto::MediaResponse;

/// POST /api/media/upload
///
/// Expects a multipart form with a single `file` field.
pub async fn upload_media(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form_error =
        |e: axum::extract::multipart::MultipartError| {
            DomainError::validation("file", format!("Malformed form data: {}", e))
        };

    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await.map_err(form_error)?;

        let stored = state.storage.store(&original_name, &bytes).await?;
        let item = MediaItem::new(
            stored.filename,
            original_name,
            mime_type,
            bytes.len() as i64,
            stored.url,
            Timestamp::now(),
        );
        state.media.create(&item).await?;

        return Ok((StatusCode::CREATED, Json(MediaResponse::from(item))));
    }

    Err(DomainError::validation("file", "No file provided").into())
}

/// GET /api/media
pub async fn list_media(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let items = state.media.list().await?;
    let response: Vec<MediaResponse> = items.into_iter().map(MediaResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/media/:id
pub async fn get_media(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state
        .media
        .find_by_id(&MediaId::from_uuid(id))
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::MediaNotFound, "Media not found"))?;

    Ok(Json(MediaResponse::from(item)))
}
