use async_trait::async_trait;
use uuid::Uuid;

use crate::{models::comments::CommentWithAuthor, Result};

use super::PostgresRepo;

#[async_trait]
pub trait CommentsRepository: Sync + Send {
    async fn create_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        text: &str,
    ) -> Result<CommentWithAuthor>;
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>>;
}

#[async_trait]
impl CommentsRepository for PostgresRepo {
    async fn create_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        text: &str,
    ) -> Result<CommentWithAuthor> {
        let id = Uuid::now_v7();

        sqlx::query(
            r#"
            INSERT INTO comments (id, post_id, author_id, text)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(post_id)
        .bind(author_id)
        .bind(text)
        .execute(&self.pool)
        .await?;

        let comment = sqlx::query_as::<_, CommentWithAuthor>(
            r#"
            SELECT c.id, c.post_id, c.author_id, u.name AS author_name, c.text, c.created_at
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>> {
        let comments = sqlx::query_as::<_, CommentWithAuthor>(
            r#"
            SELECT c.id, c.post_id, c.author_id, u.name AS author_name, c.text, c.created_at
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.post_id = $1
            ORDER BY c.created_at
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }
}
