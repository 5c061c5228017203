use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::comments::CommentWithAuthor;
use crate::models::users::FilterUserDto;
use crate::pagination::Page;

/// Feed row: a post joined with its author's name and group labels.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct PostWithMeta {
    pub id: Uuid,
    pub text: String,
    pub author_id: Uuid,
    pub author_name: String,
    pub group_id: Option<Uuid>,
    pub group_slug: Option<String>,
    pub group_title: Option<String>,
    pub image: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl PostWithMeta {
    /// Short text prefix used in log lines.
    pub fn preview(&self) -> String {
        self.text.chars().take(15).collect()
    }
}

#[derive(Validate, Debug, Deserialize)]
pub struct CreatePostDto {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
    #[serde(rename = "groupId")]
    pub group_id: Option<Uuid>,
    pub image: Option<String>,
}

/// Edits submit the full editable field set, mirroring the post form: an
/// absent group clears the group. `created_at` and the author never change.
#[derive(Validate, Debug, Deserialize)]
pub struct EditPostDto {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
    #[serde(rename = "groupId")]
    pub group_id: Option<Uuid>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponseDto {
    pub author: FilterUserDto,
    /// Whether the requesting viewer follows this author; false for
    /// anonymous viewers.
    pub following: bool,
    pub posts_count: usize,
    pub page: Page<PostWithMeta>,
}

#[derive(Debug, Serialize)]
pub struct PostViewDto {
    pub post: PostWithMeta,
    pub author: FilterUserDto,
    pub author_posts_count: usize,
    pub comments: Vec<CommentWithAuthor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(text: &str) -> PostWithMeta {
        PostWithMeta {
            id: Uuid::now_v7(),
            text: text.to_string(),
            author_id: Uuid::now_v7(),
            author_name: "alice".to_string(),
            group_id: None,
            group_slug: None,
            group_title: None,
            image: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn preview_truncates_to_fifteen_chars() {
        let post = post("a post that is much longer than fifteen characters");
        assert_eq!(post.preview(), "a post that is ");
    }

    #[test]
    fn preview_keeps_short_text_whole() {
        assert_eq!(post("short").preview(), "short");
    }
}
