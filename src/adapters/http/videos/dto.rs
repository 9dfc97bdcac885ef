//! DTOs for video endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::content::Video;

/// Request body for adding or editing a video.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// Video response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self {
            id: video.id.to_string(),
            title: video.title,
            url: video.url,
            description: video.description,
            created_at: video.created_at.to_rfc3339(),
            updated_at: video.updated_at.to_rfc3339(),
        }
    }
}
