//! YouTube video reference.

use crate::domain::foundation::{Timestamp, VideoId};

/// A curated YouTube video shown on the media page.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub url: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Video {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: VideoId::new(),
            title: title.into(),
            url: url.into(),
            description: description.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
