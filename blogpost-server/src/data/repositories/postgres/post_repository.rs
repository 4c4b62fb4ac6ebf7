use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Author, Post};

#[derive(Debug, Clone)]
pub(crate) struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    author_first_name: Option<String>,
    author_last_name: Option<String>,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, content, author_first_name, author_last_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, author_first_name, author_last_name, created_at
            "#,
        )
        .bind(input.title)
        .bind(input.content)
        .bind(input.author.first_name)
        .bind(input.author.last_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(map_row_to_post(row))
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
            id,
            title,
            content,
            author_first_name,
            author_last_name,
            created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(row.map(map_row_to_post))
    }

    async fn update_post(&self, id: i64, patch: PostPatch) -> Result<Option<Post>, DomainError> {
        let replace_author = patch.author.is_some();
        let author = patch.author.unwrap_or_default();

        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                author_first_name = CASE WHEN $4 THEN $5 ELSE author_first_name END,
                author_last_name = CASE WHEN $4 THEN $6 ELSE author_last_name END
            WHERE id = $1
            RETURNING id, title, content, author_first_name, author_last_name, created_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(replace_author)
        .bind(author.first_name)
        .bind(author.last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(row.map(map_row_to_post))
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id,
                title,
                content,
                author_first_name,
                author_last_name,
                created_at
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_post_db_error)?;

        Ok(rows.into_iter().map(map_row_to_post).collect())
    }
}

fn map_row_to_post(row: PostRow) -> Post {
    Post {
        id: row.id,
        title: row.title,
        content: row.content,
        author: Author {
            first_name: row.author_first_name,
            last_name: row.author_last_name,
        },
        created: row.created_at,
    }
}

fn map_post_db_error(err: sqlx::Error) -> DomainError {
    DomainError::Unexpected(err.to_string())
}
