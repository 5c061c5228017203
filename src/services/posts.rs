use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::{
    models::{
        comments::CommentWithAuthor,
        posts::{CreatePostDto, EditPostDto, PostViewDto, PostWithMeta},
        users::FilterUserDto,
    },
    repositories::{
        comments_repo::CommentsRepository, posts_repo::PostsRepository, user_repo::UserRepository,
    },
    services::authz,
    Error, Result,
};

/// Result of an edit attempt. A non-author is not an error: the caller falls
/// back to the post's read view.
#[derive(Debug)]
pub enum EditOutcome {
    Edited(PostWithMeta),
    NotAuthor,
}

#[derive(Clone)]
pub struct PostsService {
    posts: Arc<dyn PostsRepository>,
    comments: Arc<dyn CommentsRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostsService {
    pub fn new(
        posts: Arc<dyn PostsRepository>,
        comments: Arc<dyn CommentsRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            posts,
            comments,
            users,
        }
    }

    pub async fn create_post(&self, author_id: Uuid, dto: CreatePostDto) -> Result<PostWithMeta> {
        let post = self
            .posts
            .create_post(author_id, &dto.text, dto.group_id, dto.image.as_deref())
            .await?;

        info!(post_id = %post.id, author = %author_id, preview = %post.preview(), "post created");
        Ok(post)
    }

    pub async fn edit_post(
        &self,
        viewer_id: Uuid,
        author_name: &str,
        post_id: Uuid,
        dto: EditPostDto,
    ) -> Result<EditOutcome> {
        let post = self
            .posts
            .get_post(post_id, author_name)
            .await?
            .ok_or(Error::NotFound)?;

        if !authz::can_edit(viewer_id, post.author_id) {
            return Ok(EditOutcome::NotAuthor);
        }

        let edited = self
            .posts
            .edit_post(post_id, viewer_id, &dto.text, dto.group_id, dto.image.as_deref())
            .await?
            .ok_or(Error::NotFound)?;

        Ok(EditOutcome::Edited(edited))
    }

    /// Single-post view: the post, its author, the author's post count and
    /// the comment thread.
    pub async fn get_post_view(&self, author_name: &str, post_id: Uuid) -> Result<PostViewDto> {
        let post = self
            .posts
            .get_post(post_id, author_name)
            .await?
            .ok_or(Error::NotFound)?;

        let author = self
            .users
            .find_by_id(post.author_id)
            .await?
            .ok_or(Error::NotFound)?;

        let author_posts_count = self.posts.count_by_author(post.author_id).await? as usize;
        let comments = self.comments.list_for_post(post_id).await?;

        Ok(PostViewDto {
            post,
            author: FilterUserDto::filter_user(&author),
            author_posts_count,
            comments,
        })
    }

    pub async fn create_comment(
        &self,
        viewer_id: Uuid,
        author_name: &str,
        post_id: Uuid,
        text: &str,
    ) -> Result<CommentWithAuthor> {
        // Comments attach to an existing post only.
        let post = self
            .posts
            .get_post(post_id, author_name)
            .await?
            .ok_or(Error::NotFound)?;

        self.comments.create_comment(post.id, viewer_id, text).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::models::users::User;

    struct MemStore {
        users: Vec<User>,
        posts: Mutex<Vec<PostWithMeta>>,
        comments: Mutex<Vec<CommentWithAuthor>>,
    }

    fn user(name: &str) -> User {
        User {
            id: Uuid::now_v7(),
            name: name.to_string(),
            email: format!("{name}@example.com"),
            password: "hash".to_string(),
            created_at: Utc::now(),
        }
    }

    impl MemStore {
        fn add_post(&self, author: &User, text: &str) -> PostWithMeta {
            let post = PostWithMeta {
                id: Uuid::now_v7(),
                text: text.to_string(),
                author_id: author.id,
                author_name: author.name.clone(),
                group_id: None,
                group_slug: None,
                group_title: None,
                image: None,
                created_at: Utc::now(),
            };
            self.posts.lock().unwrap().push(post.clone());
            post
        }
    }

    #[async_trait]
    impl PostsRepository for MemStore {
        async fn list_all(&self) -> Result<Vec<PostWithMeta>> {
            Ok(self.posts.lock().unwrap().clone())
        }

        async fn list_by_group(&self, _group_id: Uuid) -> Result<Vec<PostWithMeta>> {
            Ok(Vec::new())
        }

        async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<PostWithMeta>> {
            let posts = self.posts.lock().unwrap().clone();
            Ok(posts
                .into_iter()
                .filter(|p| p.author_id == author_id)
                .collect())
        }

        async fn list_following(&self, _viewer_id: Uuid) -> Result<Vec<PostWithMeta>> {
            Ok(Vec::new())
        }

        async fn get_post(
            &self,
            post_id: Uuid,
            author_name: &str,
        ) -> Result<Option<PostWithMeta>> {
            Ok(self
                .posts
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == post_id && p.author_name == author_name)
                .cloned())
        }

        async fn create_post(
            &self,
            author_id: Uuid,
            text: &str,
            _group_id: Option<Uuid>,
            _image: Option<&str>,
        ) -> Result<PostWithMeta> {
            let author = self
                .users
                .iter()
                .find(|u| u.id == author_id)
                .cloned()
                .ok_or(Error::NotFound)?;
            Ok(self.add_post(&author, text))
        }

        async fn edit_post(
            &self,
            post_id: Uuid,
            author_id: Uuid,
            text: &str,
            group_id: Option<Uuid>,
            image: Option<&str>,
        ) -> Result<Option<PostWithMeta>> {
            let mut posts = self.posts.lock().unwrap();
            let Some(post) = posts
                .iter_mut()
                .find(|p| p.id == post_id && p.author_id == author_id)
            else {
                return Ok(None);
            };
            post.text = text.to_string();
            post.group_id = group_id;
            post.image = image.map(str::to_string);
            Ok(Some(post.clone()))
        }

        async fn count_by_author(&self, author_id: Uuid) -> Result<i64> {
            Ok(self
                .posts
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.author_id == author_id)
                .count() as i64)
        }
    }

    #[async_trait]
    impl CommentsRepository for MemStore {
        async fn create_comment(
            &self,
            post_id: Uuid,
            author_id: Uuid,
            text: &str,
        ) -> Result<CommentWithAuthor> {
            let author = self
                .users
                .iter()
                .find(|u| u.id == author_id)
                .cloned()
                .ok_or(Error::NotFound)?;
            let comment = CommentWithAuthor {
                id: Uuid::now_v7(),
                post_id,
                author_id,
                author_name: author.name,
                text: text.to_string(),
                created_at: Utc::now(),
            };
            self.comments.lock().unwrap().push(comment.clone());
            Ok(comment)
        }

        async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentWithAuthor>> {
            Ok(self
                .comments
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.post_id == post_id)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl UserRepository for MemStore {
        async fn create_user(&self, _: &str, _: &str, _: &str) -> Result<User> {
            Err(Error::InternalServerError)
        }

        async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
            Ok(self.users.iter().find(|u| u.id == user_id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self.users.iter().find(|u| u.email == email).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<User>> {
            Ok(self.users.iter().find(|u| u.name == name).cloned())
        }
    }

    fn service(users: Vec<User>) -> (PostsService, Arc<MemStore>) {
        let store = Arc::new(MemStore {
            users,
            posts: Mutex::new(Vec::new()),
            comments: Mutex::new(Vec::new()),
        });
        (
            PostsService::new(store.clone(), store.clone(), store.clone()),
            store,
        )
    }

    fn edit(text: &str) -> EditPostDto {
        EditPostDto {
            text: text.to_string(),
            group_id: None,
            image: None,
        }
    }

    #[tokio::test]
    async fn author_edit_changes_text_and_keeps_created_at() {
        let alice = user("alice");
        let (service, store) = service(vec![alice.clone()]);
        let post = store.add_post(&alice, "old");

        let outcome = service
            .edit_post(alice.id, "alice", post.id, edit("new"))
            .await
            .unwrap();

        let EditOutcome::Edited(edited) = outcome else {
            panic!("expected an edit");
        };
        assert_eq!(edited.text, "new");
        assert_eq!(edited.created_at, post.created_at);
    }

    #[tokio::test]
    async fn non_author_edit_is_denied_and_post_unchanged() {
        let alice = user("alice");
        let bob = user("bob");
        let (service, store) = service(vec![alice.clone(), bob.clone()]);
        let post = store.add_post(&alice, "original");

        let outcome = service
            .edit_post(bob.id, "alice", post.id, edit("hijacked"))
            .await
            .unwrap();

        assert!(matches!(outcome, EditOutcome::NotAuthor));
        let stored = store.get_post(post.id, "alice").await.unwrap().unwrap();
        assert_eq!(stored.text, "original");
    }

    #[tokio::test]
    async fn edit_unknown_post_is_not_found() {
        let alice = user("alice");
        let (service, _) = service(vec![alice.clone()]);

        let err = service
            .edit_post(alice.id, "alice", Uuid::now_v7(), edit("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn comment_attaches_to_existing_post_only() {
        let alice = user("alice");
        let bob = user("bob");
        let (service, store) = service(vec![alice.clone(), bob.clone()]);
        let post = store.add_post(&alice, "hello");

        let comment = service
            .create_comment(bob.id, "alice", post.id, "hi there")
            .await
            .unwrap();
        assert_eq!(comment.post_id, post.id);
        assert_eq!(comment.author_name, "bob");

        let err = service
            .create_comment(bob.id, "alice", Uuid::now_v7(), "into the void")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound));
    }

    #[tokio::test]
    async fn post_view_includes_comments_and_author_count() {
        let alice = user("alice");
        let bob = user("bob");
        let (service, store) = service(vec![alice.clone(), bob.clone()]);
        let post = store.add_post(&alice, "first");
        store.add_post(&alice, "second");
        service
            .create_comment(bob.id, "alice", post.id, "nice")
            .await
            .unwrap();

        let view = service.get_post_view("alice", post.id).await.unwrap();
        assert_eq!(view.author.name, "alice");
        assert_eq!(view.author_posts_count, 2);
        assert_eq!(view.comments.len(), 1);
    }
}
