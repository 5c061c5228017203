use async_trait::async_trait;
use uuid::Uuid;

use crate::{models::posts::PostWithMeta, Result};

use super::PostgresRepo;

// Every listing joins the author name and group labels and orders
// newest-first; the feed layer never re-sorts.
const POST_SELECT: &str = r#"
    SELECT p.id, p.text, p.author_id, u.name AS author_name,
           p.group_id, g.slug AS group_slug, g.title AS group_title,
           p.image, p.created_at
    FROM posts p
    JOIN users u ON u.id = p.author_id
    LEFT JOIN groups g ON g.id = p.group_id
"#;

#[async_trait]
pub trait PostsRepository: Sync + Send {
    async fn list_all(&self) -> Result<Vec<PostWithMeta>>;
    async fn list_by_group(&self, group_id: Uuid) -> Result<Vec<PostWithMeta>>;
    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<PostWithMeta>>;
    async fn list_following(&self, viewer_id: Uuid) -> Result<Vec<PostWithMeta>>;
    async fn get_post(&self, post_id: Uuid, author_name: &str) -> Result<Option<PostWithMeta>>;
    async fn create_post(
        &self,
        author_id: Uuid,
        text: &str,
        group_id: Option<Uuid>,
        image: Option<&str>,
    ) -> Result<PostWithMeta>;
    async fn edit_post(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        text: &str,
        group_id: Option<Uuid>,
        image: Option<&str>,
    ) -> Result<Option<PostWithMeta>>;
    async fn count_by_author(&self, author_id: Uuid) -> Result<i64>;
}

#[async_trait]
impl PostsRepository for PostgresRepo {
    async fn list_all(&self) -> Result<Vec<PostWithMeta>> {
        let sql = format!("{POST_SELECT} ORDER BY p.created_at DESC");
        let posts = sqlx::query_as::<_, PostWithMeta>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn list_by_group(&self, group_id: Uuid) -> Result<Vec<PostWithMeta>> {
        let sql = format!("{POST_SELECT} WHERE p.group_id = $1 ORDER BY p.created_at DESC");
        let posts = sqlx::query_as::<_, PostWithMeta>(&sql)
            .bind(group_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<PostWithMeta>> {
        let sql = format!("{POST_SELECT} WHERE p.author_id = $1 ORDER BY p.created_at DESC");
        let posts = sqlx::query_as::<_, PostWithMeta>(&sql)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn list_following(&self, viewer_id: Uuid) -> Result<Vec<PostWithMeta>> {
        let sql = format!(
            "{POST_SELECT}
             WHERE p.author_id IN (SELECT author_id FROM follows WHERE user_id = $1)
             ORDER BY p.created_at DESC"
        );
        let posts = sqlx::query_as::<_, PostWithMeta>(&sql)
            .bind(viewer_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn get_post(&self, post_id: Uuid, author_name: &str) -> Result<Option<PostWithMeta>> {
        let sql = format!("{POST_SELECT} WHERE p.id = $1 AND u.name = $2");
        let post = sqlx::query_as::<_, PostWithMeta>(&sql)
            .bind(post_id)
            .bind(author_name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn create_post(
        &self,
        author_id: Uuid,
        text: &str,
        group_id: Option<Uuid>,
        image: Option<&str>,
    ) -> Result<PostWithMeta> {
        let id = Uuid::now_v7();

        sqlx::query(
            r#"
            INSERT INTO posts (id, text, author_id, group_id, image)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(text)
        .bind(author_id)
        .bind(group_id)
        .bind(image)
        .execute(&self.pool)
        .await?;

        let sql = format!("{POST_SELECT} WHERE p.id = $1");
        let post = sqlx::query_as::<_, PostWithMeta>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(post)
    }

    async fn edit_post(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        text: &str,
        group_id: Option<Uuid>,
        image: Option<&str>,
    ) -> Result<Option<PostWithMeta>> {
        // created_at is never touched; the author filter makes a non-author
        // edit a no-op at the store level too.
        let updated = sqlx::query(
            r#"
            UPDATE posts
            SET text = $3, group_id = $4, image = $5
            WHERE id = $1 AND author_id = $2
            "#,
        )
        .bind(post_id)
        .bind(author_id)
        .bind(text)
        .bind(group_id)
        .bind(image)
        .execute(&self.pool)
        .await?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }

        let sql = format!("{POST_SELECT} WHERE p.id = $1");
        let post = sqlx::query_as::<_, PostWithMeta>(&sql)
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn count_by_author(&self, author_id: Uuid) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM posts WHERE author_id = $1
            "#,
        )
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count.0)
    }
}
