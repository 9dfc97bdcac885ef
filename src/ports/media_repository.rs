//! Media metadata repository port.

use async_trait::async_trait;

use crate::domain::content::MediaItem;
use crate::domain::foundation::{DomainError, MediaId};

/// Persistence for uploaded media metadata.
#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn create(&self, item: &MediaItem) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &MediaId) -> Result<Option<MediaItem>, DomainError>;

    /// All items, most recently uploaded first.
    async fn list(&self) -> Result<Vec<MediaItem>, DomainError>;
}
