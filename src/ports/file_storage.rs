//! Upload storage port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Where an accepted upload ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Name the bytes were stored under (unique per upload).
    pub filename: String,
    /// Public URL path the file is served from.
    pub url: String,
}

/// Stores uploaded file bytes.
///
/// Storage mechanics beyond this contract (CDN, GridFS, disk) are the
/// adapter's business; serving the bytes back is delegated to the front
/// proxy.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Persist `bytes` under a unique name derived from `original_name`.
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_trait_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn FileStorage>();
    }
}
