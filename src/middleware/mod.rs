use std::sync::Arc;

use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::{models::users::User, AppState, Error, Result};

/// The requesting identity, resolved once per request. `None` is an
/// anonymous viewer; mutating handlers call [`MaybeAuthUser::require`].
#[derive(Debug, Clone, Default)]
pub struct MaybeAuthUser(pub Option<User>);

impl MaybeAuthUser {
    /// Anonymous access to a mutating operation is rejected with a redirect
    /// to the login flow, never a silent write.
    pub fn require(&self) -> Result<User> {
        self.0.clone().ok_or(Error::LoginRequired)
    }

    pub fn id(&self) -> Option<Uuid> {
        self.0.as_ref().map(|user| user.id)
    }
}

fn extract_token(req: &Request) -> Option<String> {
    let cookies = CookieJar::from_headers(req.headers());

    cookies
        .get("token")
        .map(|c| c.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .and_then(|auth_value| {
                    auth_value
                        .strip_prefix("Bearer ")
                        .map(|stripped| stripped.to_string())
                })
        })
}

/// Resolves the viewer from the token cookie or Bearer header. A missing or
/// stale token leaves the viewer anonymous rather than failing the request;
/// read-only views stay reachable.
pub async fn resolve_viewer(mut req: Request, next: Next) -> Result<impl IntoResponse> {
    let app_state = req
        .extensions()
        .get::<Arc<AppState>>()
        .cloned()
        .ok_or(Error::InternalServerError)?;

    let mut viewer = MaybeAuthUser::default();

    if let Some(token) = extract_token(&req) {
        if let Ok(user_id) = app_state.auth_service.decode_token(token) {
            if let Ok(user) = app_state.users_service.get_user(user_id).await {
                viewer = MaybeAuthUser(Some(user));
            }
        }
    }

    req.extensions_mut().insert(viewer);

    Ok(next.run(req).await)
}
