//! Page copy repository port.

use async_trait::async_trait;

use crate::domain::content::PageContent;
use crate::domain::foundation::{DomainError, PageContentId, Timestamp};

/// Persistence for editable page copy.
#[async_trait]
pub trait PageContentRepository: Send + Sync {
    async fn create(&self, content: &PageContent) -> Result<(), DomainError>;

    /// Replace the intro of an existing revision.
    ///
    /// # Errors
    ///
    /// - `PageContentNotFound` when the id does not exist
    async fn update(
        &self,
        id: &PageContentId,
        intro: String,
        now: Timestamp,
    ) -> Result<PageContent, DomainError>;

    /// The most recently updated revision, if any.
    async fn latest(&self) -> Result<Option<PageContent>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_content_repository_trait_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PageContentRepository>();
    }
}
