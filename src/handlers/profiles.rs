use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Extension, Json, Router,
};

use crate::{middleware::MaybeAuthUser, pagination::PageQuery, AppState, Result};

pub fn profiles_handler() -> Router {
    Router::new()
        .route("/{username}", get(profile))
        .route("/{username}/follow", post(follow).delete(unfollow))
}

/// Profile view: the author, their paginated posts, and whether the viewer
/// follows them.
async fn profile(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(viewer): Extension<MaybeAuthUser>,
    Path(username): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let profile = app_state
        .feed_service
        .profile_view(&username, viewer.id(), query.number())
        .await?;
    Ok(Json(profile))
}

/// Follow an author. Self-follow and duplicate follows are silent no-ops;
/// either way the caller lands back on the profile.
async fn follow(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(viewer): Extension<MaybeAuthUser>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse> {
    let viewer = viewer.require()?;
    app_state
        .follows_service
        .follow(viewer.id, &username)
        .await?;
    Ok(Redirect::to(&format!("/api/profiles/{username}")))
}

/// Unfollow an author. Removing an absent follow is a silent no-op.
async fn unfollow(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(viewer): Extension<MaybeAuthUser>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse> {
    let viewer = viewer.require()?;
    app_state
        .follows_service
        .unfollow(viewer.id, &username)
        .await?;
    Ok(Redirect::to(&format!("/api/profiles/{username}")))
}
