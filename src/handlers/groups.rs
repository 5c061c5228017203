use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use serde_json::json;
use validator::Validate;

use crate::{
    middleware::MaybeAuthUser, models::groups::CreateGroupDto, pagination::PageQuery, AppState,
    Result,
};

pub fn groups_handler() -> Router {
    Router::new()
        .route("/", get(list_groups).post(create_group))
        .route("/{slug}", get(group_view))
}

async fn list_groups(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let groups = app_state.groups_service.list_groups().await?;
    Ok(Json(groups))
}

async fn create_group(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(viewer): Extension<MaybeAuthUser>,
    Json(new_group): Json<CreateGroupDto>,
) -> Result<impl IntoResponse> {
    viewer.require()?;
    new_group.validate()?;

    let group = app_state.groups_service.create_group(new_group).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// Group feed: the group header plus its posts, newest-first.
async fn group_view(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let (group, page) = app_state
        .feed_service
        .group_view(&slug, query.number())
        .await?;
    Ok(Json(json!({ "group": group, "page": page })))
}
