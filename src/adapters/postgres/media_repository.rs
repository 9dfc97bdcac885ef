//! PostgreSQL implementation of MediaRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::content::MediaItem;
use crate::domain::foundation::{DomainError, MediaId, Timestamp};
use crate::ports::MediaRepository;

/// Media metadata persistence backed by the `media_items` table.
pub struct PostgresMediaRepository {
    pool: PgPool,
}

impl PostgresMediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a media item.
#[derive(Debug, sqlx::FromRow)]
struct MediaRow {
    id: Uuid,
    filename: String,
    original_name: String,
    mime_type: String,
    size: i64,
    url: String,
    uploaded_at: DateTime<Utc>,
}

impl From<MediaRow> for MediaItem {
    fn from(row: MediaRow) -> Self {
        MediaItem {
            id: MediaId::from_uuid(row.id),
            filename: row.filename,
            original_name: row.original_name,
            mime_type: row.mime_type,
            size: row.size,
            url: row.url,
            uploaded_at: Timestamp::from_datetime(row.uploaded_at),
        }
    }
}

#[async_trait]
impl MediaRepository for PostgresMediaRepository {
    async fn create(&self, item: &MediaItem) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO media_items (
                id, filename, original_name, mime_type, size, url, uploaded_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(item.id.as_uuid())
        .bind(&item.filename)
        .bind(&item.original_name)
        .bind(&item.mime_type)
        .bind(item.size)
        .bind(&item.url)
        .bind(item.uploaded_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to create media item: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &MediaId) -> Result<Option<MediaItem>, DomainError> {
        let row: Option<MediaRow> = sqlx::query_as(
            r#"SELECT * FROM media_items WHERE id = $1"#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load media item: {}", e)))?;

        Ok(row.map(MediaItem::from))
    }

    async fn list(&self) -> Result<Vec<MediaItem>, DomainError> {
        let rows: Vec<MediaRow> = sqlx::query_as(
            r#"SELECT * FROM media_items ORDER BY uploaded_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list media items: {}", e)))?;

        Ok(rows.into_iter().map(MediaItem::from).collect())
    }
}
