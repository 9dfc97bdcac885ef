//! PostgreSQL implementation of VideoRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::content::Video;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, VideoId};
use crate::ports::{VideoRepository, VideoUpdate};

/// Video reference persistence backed by the `youtube_videos` table.
pub struct PostgresVideoRepository {
    pool: PgPool,
}

impl PostgresVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a video reference.
#[derive(Debug, sqlx::FromRow)]
struct VideoRow {
    id: Uuid,
    title: String,
    url: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<VideoRow> for Video {
    fn from(row: VideoRow) -> Self {
        Video {
            id: VideoId::from_uuid(row.id),
            title: row.title,
            url: row.url,
            description: row.description,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

fn not_found() -> DomainError {
    DomainError::new(ErrorCode::VideoNotFound, "Video not found")
}

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    async fn create(&self, video: &Video) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO youtube_videos (
                id, title, url, description, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(video.id.as_uuid())
        .bind(&video.title)
        .bind(&video.url)
        .bind(&video.description)
        .bind(video.created_at.as_datetime())
        .bind(video.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to create video: {}", e)))?;

        Ok(())
    }

    async fn update(
        &self,
        id: &VideoId,
        update: VideoUpdate,
        now: Timestamp,
    ) -> Result<Video, DomainError> {
        let row: Option<VideoRow> = sqlx::query_as(
            r#"
            UPDATE youtube_videos SET
                title = COALESCE($2, title),
                url = COALESCE($3, url),
                description = COALESCE($4, description),
                updated_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id.as_uuid())
        .bind(update.title)
        .bind(update.url)
        .bind(update.description)
        .bind(now.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update video: {}", e)))?;

        row.map(Video::from).ok_or_else(not_found)
    }

    async fn delete(&self, id: &VideoId) -> Result<(), DomainError> {
        let result = sqlx::query(r#"DELETE FROM youtube_videos WHERE id = $1"#)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete video: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Video>, DomainError> {
        let rows: Vec<VideoRow> = sqlx::query_as(
            r#"SELECT * FROM youtube_videos ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list videos: {}", e)))?;

        Ok(rows.into_iter().map(Video::from).collect())
    }
}
