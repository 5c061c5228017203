use std::sync::Arc;

use uuid::Uuid;

use crate::{
    models::{
        groups::Group,
        posts::{PostWithMeta, ProfileResponseDto},
        users::FilterUserDto,
    },
    pagination::{paginate, Page, PAGE_SIZE},
    repositories::{
        follows_repo::FollowsRepository, groups_repo::GroupsRepository,
        posts_repo::PostsRepository, user_repo::UserRepository,
    },
    Error, Result,
};

/// Which slice of the post store a feed request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewKind {
    Global,
    Group(String),
    Profile(String),
    Following,
}

/// Composes paginated, newest-first post feeds. Pure reads; the viewer is an
/// explicit argument, never ambient state.
#[derive(Clone)]
pub struct FeedService {
    posts: Arc<dyn PostsRepository>,
    groups: Arc<dyn GroupsRepository>,
    users: Arc<dyn UserRepository>,
    follows: Arc<dyn FollowsRepository>,
}

impl FeedService {
    pub fn new(
        posts: Arc<dyn PostsRepository>,
        groups: Arc<dyn GroupsRepository>,
        users: Arc<dyn UserRepository>,
        follows: Arc<dyn FollowsRepository>,
    ) -> Self {
        Self {
            posts,
            groups,
            users,
            follows,
        }
    }

    pub async fn compose(
        &self,
        view: ViewKind,
        viewer: Option<Uuid>,
        page: Option<usize>,
    ) -> Result<Page<PostWithMeta>> {
        let posts = match view {
            ViewKind::Global => self.posts.list_all().await?,
            ViewKind::Group(slug) => {
                let group = self
                    .groups
                    .find_by_slug(&slug)
                    .await?
                    .ok_or(Error::NotFound)?;
                self.posts.list_by_group(group.id).await?
            }
            ViewKind::Profile(username) => {
                let author = self
                    .users
                    .find_by_name(&username)
                    .await?
                    .ok_or(Error::NotFound)?;
                self.posts.list_by_author(author.id).await?
            }
            ViewKind::Following => {
                let viewer = viewer.ok_or(Error::LoginRequired)?;
                // Zero follows is an empty feed, not an error.
                self.posts.list_following(viewer).await?
            }
        };

        Ok(paginate(posts, PAGE_SIZE, page))
    }

    /// Group feed plus the group's own fields for the header.
    pub async fn group_view(
        &self,
        slug: &str,
        page: Option<usize>,
    ) -> Result<(Group, Page<PostWithMeta>)> {
        let group = self
            .groups
            .find_by_slug(slug)
            .await?
            .ok_or(Error::NotFound)?;
        let posts = self.posts.list_by_group(group.id).await?;
        Ok((group, paginate(posts, PAGE_SIZE, page)))
    }

    /// Profile feed plus author info and whether the viewer follows them.
    pub async fn profile_view(
        &self,
        username: &str,
        viewer: Option<Uuid>,
        page: Option<usize>,
    ) -> Result<ProfileResponseDto> {
        let author = self
            .users
            .find_by_name(username)
            .await?
            .ok_or(Error::NotFound)?;

        let following = match viewer {
            Some(viewer) => self.follows.follow_exists(viewer, author.id).await?,
            None => false,
        };

        let posts = self.posts.list_by_author(author.id).await?;
        let posts_count = posts.len();

        Ok(ProfileResponseDto {
            author: FilterUserDto::filter_user(&author),
            following,
            posts_count,
            page: paginate(posts, PAGE_SIZE, page),
        })
    }
}
