//! DTOs for page copy endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::content::PageContent;

/// Request body for writing page copy.
#[derive(Debug, Clone, Deserialize)]
pub struct PageContentRequest {
    #[serde(default)]
    pub intro: String,
}

/// Page copy response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContentResponse {
    pub id: String,
    pub intro: String,
    pub updated_at: String,
}

impl From<PageContent> for PageContentResponse {
    fn from(content: PageContent) -> Self {
        Self {
            id: content.id.to_string(),
            intro: content.intro,
            updated_at: content.updated_at.to_rfc3339(),
        }
    }
}
