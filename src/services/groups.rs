use std::sync::Arc;

use crate::{
    models::groups::{CreateGroupDto, Group},
    repositories::groups_repo::GroupsRepository,
    Error, Result,
};

#[derive(Clone)]
pub struct GroupsService {
    groups: Arc<dyn GroupsRepository>,
}

impl GroupsService {
    pub fn new(groups: Arc<dyn GroupsRepository>) -> Self {
        Self { groups }
    }

    pub async fn create_group(&self, dto: CreateGroupDto) -> Result<Group> {
        if self.groups.find_by_slug(&dto.slug).await?.is_some() {
            return Err(Error::BadRequest("Slug already exists".to_string()));
        }

        self.groups
            .create_group(&dto.title, &dto.slug, &dto.description)
            .await
    }

    pub async fn list_groups(&self) -> Result<Vec<Group>> {
        self.groups.list_groups().await
    }
}
