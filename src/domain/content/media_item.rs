//! Uploaded media metadata.

use crate::domain::foundation::{MediaId, Timestamp};

/// Metadata for a file accepted through the upload endpoint.
///
/// The bytes themselves live behind the `FileStorage` port; this records
/// what was uploaded and where it is served from.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: MediaId,
    /// Name the file was stored under (unique-prefixed).
    pub filename: String,
    /// Name the client uploaded it as.
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
    pub uploaded_at: Timestamp,
}

impl MediaItem {
    pub fn new(
        filename: impl Into<String>,
        original_name: impl Into<String>,
        mime_type: impl Into<String>,
        size: i64,
        url: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: MediaId::new(),
            filename: filename.into(),
            original_name: original_name.into(),
            mime_type: mime_type.into(),
            size,
            url: url.into(),
            uploaded_at: now,
        }
    }
}
