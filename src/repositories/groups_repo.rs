use async_trait::async_trait;
use uuid::Uuid;

use crate::{models::groups::Group, Result};

use super::PostgresRepo;

#[async_trait]
pub trait GroupsRepository: Sync + Send {
    async fn create_group(&self, title: &str, slug: &str, description: &str) -> Result<Group>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>>;
    async fn list_groups(&self) -> Result<Vec<Group>>;
}

#[async_trait]
impl GroupsRepository for PostgresRepo {
    async fn create_group(&self, title: &str, slug: &str, description: &str) -> Result<Group> {
        let id = Uuid::now_v7();

        let group = sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups (id, title, slug, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, slug, description
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(slug)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(group)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            SELECT id, title, slug, description
            FROM groups
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(group)
    }

    async fn list_groups(&self) -> Result<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(
            r#"
            SELECT id, title, slug, description
            FROM groups
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(groups)
    }
}
