//! PostgreSQL implementation of BlogRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::content::{normalize_tags, BlogPost};
use crate::domain::foundation::{DomainError, ErrorCode, PostId, Timestamp};
use crate::ports::{BlogPostUpdate, BlogRepository};

/// Blog post persistence backed by the `blog_posts` table.
pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a blog post.
#[derive(Debug, sqlx::FromRow)]
struct BlogPostRow {
    id: Uuid,
    title: String,
    content: String,
    author: String,
    cover_image: String,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BlogPostRow> for BlogPost {
    fn from(row: BlogPostRow) -> Self {
        BlogPost {
            id: PostId::from_uuid(row.id),
            title: row.title,
            content: row.content,
            author: row.author,
            cover_image: row.cover_image,
            tags: row.tags,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

fn not_found() -> DomainError {
    DomainError::new(ErrorCode::PostNotFound, "Blog not found")
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn create(&self, post: &BlogPost) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO blog_posts (
                id, title, content, author, cover_image, tags, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(post.id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .bind(&post.cover_image)
        .bind(&post.tags)
        .bind(post.created_at.as_datetime())
        .bind(post.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to create post: {}", e)))?;

        Ok(())
    }

    async fn update(
        &self,
        id: &PostId,
        update: BlogPostUpdate,
        now: Timestamp,
    ) -> Result<BlogPost, DomainError> {
        let tags = update.tags.map(normalize_tags);
        let row: Option<BlogPostRow> = sqlx::query_as(
            r#"
            UPDATE blog_posts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                author = COALESCE($4, author),
                cover_image = COALESCE($5, cover_image),
                tags = COALESCE($6, tags),
                updated_at = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id.as_uuid())
        .bind(update.title)
        .bind(update.content)
        .bind(update.author)
        .bind(update.cover_image)
        .bind(tags)
        .bind(now.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update post: {}", e)))?;

        row.map(BlogPost::from).ok_or_else(not_found)
    }

    async fn delete(&self, id: &PostId) -> Result<(), DomainError> {
        let result = sqlx::query(r#"DELETE FROM blog_posts WHERE id = $1"#)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete post: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<BlogPost>, DomainError> {
        let row: Option<BlogPostRow> = sqlx::query_as(
            r#"SELECT * FROM blog_posts WHERE id = $1"#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load post: {}", e)))?;

        Ok(row.map(BlogPost::from))
    }

    async fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        let rows: Vec<BlogPostRow> = sqlx::query_as(
            r#"SELECT * FROM blog_posts ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list posts: {}", e)))?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }
}
