use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    middleware::MaybeAuthUser,
    models::{
        comments::CreateCommentDto,
        posts::{CreatePostDto, EditPostDto},
    },
    pagination::PageQuery,
    services::{feed::ViewKind, posts::EditOutcome},
    AppState, Result,
};

pub fn posts_handler() -> Router {
    Router::new()
        .route("/", get(index).post(create_post))
        .route("/{username}/{post_id}", get(post_view).put(edit_post))
        .route("/{username}/{post_id}/comments", post(add_comment))
}

/// Global feed: every post, newest-first, ten per page.
async fn index(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(viewer): Extension<MaybeAuthUser>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let page = app_state
        .feed_service
        .compose(ViewKind::Global, viewer.id(), query.number())
        .await?;
    Ok(Json(page))
}

/// Following feed: posts by authors the viewer follows.
pub async fn following_feed(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(viewer): Extension<MaybeAuthUser>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let viewer = viewer.require()?;
    let page = app_state
        .feed_service
        .compose(ViewKind::Following, Some(viewer.id), query.number())
        .await?;
    Ok(Json(page))
}

async fn create_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(viewer): Extension<MaybeAuthUser>,
    Json(new_post): Json<CreatePostDto>,
) -> Result<impl IntoResponse> {
    let viewer = viewer.require()?;
    new_post.validate()?;

    let post = app_state
        .posts_service
        .create_post(viewer.id, new_post)
        .await?;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn post_view(
    Extension(app_state): Extension<Arc<AppState>>,
    Path((username, post_id)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse> {
    let view = app_state
        .posts_service
        .get_post_view(&username, post_id)
        .await?;
    Ok(Json(view))
}

async fn edit_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(viewer): Extension<MaybeAuthUser>,
    Path((username, post_id)): Path<(String, Uuid)>,
    Json(update): Json<EditPostDto>,
) -> Result<impl IntoResponse> {
    let viewer = viewer.require()?;
    update.validate()?;

    let outcome = app_state
        .posts_service
        .edit_post(viewer.id, &username, post_id, update)
        .await?;

    match outcome {
        EditOutcome::Edited(post) => Ok(Json(post).into_response()),
        // Not the author: degrade to the post's read view, no hard error.
        EditOutcome::NotAuthor => {
            Ok(Redirect::to(&format!("/api/posts/{username}/{post_id}")).into_response())
        }
    }
}

async fn add_comment(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(viewer): Extension<MaybeAuthUser>,
    Path((username, post_id)): Path<(String, Uuid)>,
    Json(new_comment): Json<CreateCommentDto>,
) -> Result<impl IntoResponse> {
    let viewer = viewer.require()?;
    new_comment.validate()?;

    let comment = app_state
        .posts_service
        .create_comment(viewer.id, &username, post_id, &new_comment.text)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}
