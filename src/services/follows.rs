use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    repositories::{follows_repo::FollowsRepository, user_repo::UserRepository},
    Error, Result,
};

/// Maintains the directed follow graph. Self-follow and duplicate-follow
/// attempts are absorbed silently; the caller is routed back to the profile
/// either way.
#[derive(Clone)]
pub struct FollowService {
    users: Arc<dyn UserRepository>,
    follows: Arc<dyn FollowsRepository>,
}

impl FollowService {
    pub fn new(users: Arc<dyn UserRepository>, follows: Arc<dyn FollowsRepository>) -> Self {
        Self { users, follows }
    }

    pub async fn follow(&self, viewer_id: Uuid, target_name: &str) -> Result<()> {
        let author = self
            .users
            .find_by_name(target_name)
            .await?
            .ok_or(Error::NotFound)?;

        if viewer_id == author.id {
            debug!(viewer = %viewer_id, "ignoring self-follow");
            return Ok(());
        }

        // Fast path only. The unique constraint behind insert_follow is the
        // authoritative guard, so a racing duplicate still ends as a no-op.
        if self.follows.follow_exists(viewer_id, author.id).await? {
            return Ok(());
        }

        if self.follows.insert_follow(viewer_id, author.id).await? {
            info!(follower = %viewer_id, author = %author.id, "follow created");
        }
        Ok(())
    }

    pub async fn unfollow(&self, viewer_id: Uuid, target_name: &str) -> Result<()> {
        let author = self
            .users
            .find_by_name(target_name)
            .await?
            .ok_or(Error::NotFound)?;

        // Deleting an absent relationship is a no-op, not an error.
        self.follows.delete_follow(viewer_id, author.id).await
    }

    pub async fn is_following(&self, viewer_id: Option<Uuid>, author_id: Uuid) -> Result<bool> {
        match viewer_id {
            Some(viewer_id) => self.follows.follow_exists(viewer_id, author_id).await,
            None => Ok(false),
        }
    }
}
