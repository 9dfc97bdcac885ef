//! HTTP handlers for page copy endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::domain::content::PageContent;
use crate::domain::foundation::{PageContentId, Timestamp};

use super::super::error::ApiError;
use super::super::middleware::RequireAdmin;
use super::super::router::AppState;
use super::dto::{PageContentRequest, PageContentResponse};

/// GET /api/blogpagecontent
///
/// Returns the latest revision, or `null` when none has been written yet
/// (the SPA renders its built-in default copy in that case).
pub async fn get_content(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let content = state.pages.latest().await?;
    Ok(Json(content.map(PageContentResponse::from)))
}

/// POST /api/blogpagecontent (admin)
pub async fn create_content(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<PageContentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let content = PageContent::new(request.intro, Timestamp::now());
    state.pages.create(&content).await?;

    Ok((StatusCode::CREATED, Json(PageContentResponse::from(content))))
}

/// PUT /api/blogpagecontent/:id (admin)
pub async fn update_content(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PageContentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let content = state
        .pages
        .update(
            &PageContentId::from_uuid(id),
            request.intro,
            Timestamp::now(),
        )
        .await?;

    Ok(Json(PageContentResponse::from(content)))
}
