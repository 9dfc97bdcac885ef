//! DTOs for blog endpoints.

use serde::Serialize;

use crate::domain::content::BlogPost;

/// Blog post response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub cover_image: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            author: post.author,
            cover_image: post.cover_image,
            tags: post.tags,
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
        }
    }
}
