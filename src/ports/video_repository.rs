//! YouTube video reference repository port.

use async_trait::async_trait;

use crate::domain::content::Video;
use crate::domain::foundation::{DomainError, Timestamp, VideoId};

/// Fields an edit may change; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct VideoUpdate {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Persistence for video references.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn create(&self, video: &Video) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `VideoNotFound` when the id does not exist
    async fn update(
        &self,
        id: &VideoId,
        update: VideoUpdate,
        now: Timestamp,
    ) -> Result<Video, DomainError>;

    /// # Errors
    ///
    /// - `VideoNotFound` when the id does not exist
    async fn delete(&self, id: &VideoId) -> Result<(), DomainError>;

    /// All videos, newest first.
    async fn list(&self) -> Result<Vec<Video>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_repository_trait_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn VideoRepository>();
    }
}
