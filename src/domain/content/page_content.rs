//! Editable page copy.

use crate::domain::foundation::{PageContentId, Timestamp};

/// Intro/description copy for the blog landing page.
///
/// Revisions are append-or-update; readers take the most recently updated
/// row.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub id: PageContentId,
    pub intro: String,
    pub updated_at: Timestamp,
}

impl PageContent {
    pub fn new(intro: impl Into<String>, now: Timestamp) -> Self {
        Self {
            id: PageContentId::new(),
            intro: intro.into(),
            updated_at: now,
        }
    }
}
