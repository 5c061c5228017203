use async_trait::async_trait;
use uuid::Uuid;

use crate::Result;

use super::PostgresRepo;

#[async_trait]
pub trait FollowsRepository: Sync + Send {
    /// Inserts the follow edge unless it already exists. Returns whether a
    /// row was actually created.
    async fn insert_follow(&self, user_id: Uuid, author_id: Uuid) -> Result<bool>;
    /// Deletes the follow edge if present. Absent edge is not an error.
    async fn delete_follow(&self, user_id: Uuid, author_id: Uuid) -> Result<()>;
    async fn follow_exists(&self, user_id: Uuid, author_id: Uuid) -> Result<bool>;
}

#[async_trait]
impl FollowsRepository for PostgresRepo {
    async fn insert_follow(&self, user_id: Uuid, author_id: Uuid) -> Result<bool> {
        let id = Uuid::now_v7();

        // ON CONFLICT rides on the unique (user_id, author_id) constraint, so
        // two racing requests collapse to a single row with no error.
        let inserted = sqlx::query(
            r#"
            INSERT INTO follows (id, user_id, author_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, author_id) DO NOTHING
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(author_id)
        .execute(&self.pool)
        .await?;

        Ok(inserted.rows_affected() > 0)
    }

    async fn delete_follow(&self, user_id: Uuid, author_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM follows WHERE user_id = $1 AND author_id = $2
            "#,
        )
        .bind(user_id)
        .bind(author_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn follow_exists(&self, user_id: Uuid, author_id: Uuid) -> Result<bool> {
        let exists: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM follows WHERE user_id = $1 AND author_id = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }
}
