//! DTOs for media endpoints.

use serde::Serialize;

use crate::domain::content::MediaItem;

/// Media metadata response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponse {
    pub id: String,
    pub filename: String,
    #[serde(rename = "originalname")]
    pub original_name: String,
    #[serde(rename = "mimetype")]
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    pub uploaded_at: String,
}

impl From<MediaItem> for MediaResponse {
    fn from(item: MediaItem) -> Self {
        Self {
            id: item.id.to_string(),
            filename: item.filename,
            original_name: item.original_name,
            mime_type: item.mime_type,
            size: item.size,
            url: item.url,
            uploaded_at: item.uploaded_at.to_rfc3339(),
        }
    }
}
