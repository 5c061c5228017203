use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Comment row joined with its author's name, as rendered under a post.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct CommentWithAuthor {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Validate, Debug, Deserialize)]
pub struct CreateCommentDto {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}
