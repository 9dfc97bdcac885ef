//! Blog post repository port.

use async_trait::async_trait;

use crate::domain::content::BlogPost;
use crate::domain::foundation::{DomainError, PostId, Timestamp};

/// Fields an edit may change; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct BlogPostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Persistence for blog posts.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn create(&self, post: &BlogPost) -> Result<(), DomainError>;

    /// Apply an update; returns the stored post.
    ///
    /// # Errors
    ///
    /// - `PostNotFound` when the id does not exist
    async fn update(
        &self,
        id: &PostId,
        update: BlogPostUpdate,
        now: Timestamp,
    ) -> Result<BlogPost, DomainError>;

    /// # Errors
    ///
    /// - `PostNotFound` when the id does not exist
    async fn delete(&self, id: &PostId) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &PostId) -> Result<Option<BlogPost>, DomainError>;

    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<BlogPost>, DomainError>;
}
