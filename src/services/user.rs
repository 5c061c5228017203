use std::sync::Arc;

use uuid::Uuid;

use crate::{models::users::User, repositories::user_repo::UserRepository, Error, Result};

#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<User> {
        let user = self.user_repo.find_by_id(user_id).await?;
        user.ok_or(Error::NotFound)
    }
}
