use std::sync::Arc;

use axum::{
    http::{header, Method},
    middleware::from_fn,
    routing::get,
    Extension, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        auth::auth_handler,
        groups::groups_handler,
        posts::{following_feed, posts_handler},
        profiles::profiles_handler,
    },
    middleware::resolve_viewer,
    AppState,
};

pub fn configure_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_origin(Any)
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_route = Router::new()
        .nest("/auth", auth_handler())
        .nest("/posts", posts_handler())
        .nest("/groups", groups_handler())
        .nest("/profiles", profiles_handler())
        .route("/feed", get(following_feed))
        .layer(from_fn(resolve_viewer))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new().nest("/api", api_route)
}
