//! HTTP handlers for blog endpoints.
//!
//! Create and update accept multipart forms so the admin editor can attach
//! a cover image alongside the text fields.

use axum::extract::{Json, Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use crate::domain::content::BlogPost;
use crate::domain::foundation::{DomainError, ErrorCode, PostId, Timestamp};
use crate::ports::BlogPostUpdate;

use super::super::auth::MessageResponse;
use super::super::error::ApiError;
use super::super::middleware::RequireAdmin;
use super::super::router::AppState;
use super::dto::BlogPostResponse;

/// Fields collected from a multipart blog form.
#[derive(Default)]
struct BlogForm {
    title: Option<String>,
    content: Option<String>,
    author: Option<String>,
    tags: Option<Vec<String>>,
    cover: Option<(String, Vec<u8>)>,
}

fn form_error(err: impl std::fmt::Display) -> DomainError {
    DomainError::validation("form", format!("Malformed form data: {}", err))
}

/// Reads a multipart blog form.
///
/// Tags may arrive as repeated `tags` fields or a single comma-separated
/// value; `tags[]` is accepted for FormData-style clients.
async fn read_form(mut multipart: Multipart) -> Result<BlogForm, DomainError> {
    let mut form = BlogForm::default();

    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => form.title = Some(field.text().await.map_err(form_error)?),
            "content" => form.content = Some(field.text().await.map_err(form_error)?),
            "author" => form.author = Some(field.text().await.map_err(form_error)?),
            "tags" | "tags[]" => {
                let value = field.text().await.map_err(form_error)?;
                form.tags
                    .get_or_insert_with(Vec::new)
                    .extend(value.split(',').map(|t| t.to_string()));
            }
            "coverImage" => {
                let filename = field.file_name().unwrap_or("cover").to_string();
                let bytes = field.bytes().await.map_err(form_error)?;
                form.cover = Some((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    Ok(form)
}

fn require_field(value: Option<String>, name: &str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::validation(name, format!("{} is required", name))),
    }
}

/// GET /api/blog
pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let posts = state.blog.list().await?;
    let response: Vec<BlogPostResponse> = posts.into_iter().map(BlogPostResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/blog/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let post = state
        .blog
        .find_by_id(&PostId::from_uuid(id))
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::PostNotFound, "Blog not found"))?;

    Ok(Json(BlogPostResponse::from(post)))
}

/// POST /api/blog (admin, multipart)
pub async fn create_post(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = read_form(multipart).await?;

    let title = require_field(form.title, "title")?;
    let content = require_field(form.content, "content")?;
    let author = require_field(form.author, "author")?;

    let cover_image = match form.cover {
        Some((filename, bytes)) => state.storage.store(&filename, &bytes).await?.url,
        None => String::new(),
    };

    let post = BlogPost::new(
        title,
        content,
        author,
        cover_image,
        form.tags.unwrap_or_default(),
        Timestamp::now(),
    );
    state.blog.create(&post).await?;

    Ok((StatusCode::CREATED, Json(BlogPostResponse::from(post))))
}

/// PUT /api/blog/:id (admin, multipart)
pub async fn update_post(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = read_form(multipart).await?;

    let cover_image = match form.cover {
        Some((filename, bytes)) => Some(state.storage.store(&filename, &bytes).await?.url),
        None => None,
    };

    let post = state
        .blog
        .update(
            &PostId::from_uuid(id),
            BlogPostUpdate {
                title: form.title,
                content: form.content,
                author: form.author,
                cover_image,
                tags: form.tags,
            },
            Timestamp::now(),
        )
        .await?;

    Ok(Json(BlogPostResponse::from(post)))
}

/// DELETE /api/blog/:id (admin)
pub async fn delete_post(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state.blog.delete(&PostId::from_uuid(id)).await?;
    Ok(Json(MessageResponse::new("Blog deleted")))
}
