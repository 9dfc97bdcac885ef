//! PostgreSQL implementation of PageContentRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::content::PageContent;
use crate::domain::foundation::{DomainError, ErrorCode, PageContentId, Timestamp};
use crate::ports::PageContentRepository;

/// Page copy persistence backed by the `blog_page_content` table.
pub struct PostgresPageContentRepository {
    pool: PgPool,
}

impl PostgresPageContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a page-copy revision.
#[derive(Debug, sqlx::FromRow)]
struct PageContentRow {
    id: Uuid,
    intro: String,
    updated_at: DateTime<Utc>,
}

impl From<PageContentRow> for PageContent {
    fn from(row: PageContentRow) -> Self {
        PageContent {
            id: PageContentId::from_uuid(row.id),
            intro: row.intro,
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[async_trait]
impl PageContentRepository for PostgresPageContentRepository {
    async fn create(&self, content: &PageContent) -> Result<(), DomainError> {
        sqlx::query(
            r#"INSERT INTO blog_page_content (id, intro, updated_at) VALUES ($1, $2, $3)"#,
        )
        .bind(content.id.as_uuid())
        .bind(&content.intro)
        .bind(content.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to create page content: {}", e)))?;

        Ok(())
    }

    async fn update(
        &self,
        id: &PageContentId,
        intro: String,
        now: Timestamp,
    ) -> Result<PageContent, DomainError> {
        let row: Option<PageContentRow> = sqlx::query_as(
            r#"
            UPDATE blog_page_content SET intro = $2, updated_at = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id.as_uuid())
        .bind(intro)
        .bind(now.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update page content: {}", e)))?;

        row.map(PageContent::from).ok_or_else(|| {
            DomainError::new(ErrorCode::PageContentNotFound, "Content not found")
        })
    }

    async fn latest(&self) -> Result<Option<PageContent>, DomainError> {
        let row: Option<PageContentRow> = sqlx::query_as(
            r#"SELECT * FROM blog_page_content ORDER BY updated_at DESC LIMIT 1"#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load page content: {}", e)))?;

        Ok(row.map(PageContent::from))
    }
}
