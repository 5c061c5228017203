use std::sync::Arc;

use config::Config;
use repositories::PostgresRepo;
use routes::{configure_cors, create_router};
use services::{
    auth::AuthService, feed::FeedService, follows::FollowService, groups::GroupsService,
    posts::PostsService, user::UserService,
};
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing_subscriber::EnvFilter;

pub use self::errors::{Error, Result};

mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod pagination;
mod repositories;
mod routes;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Config,
    pub auth_service: AuthService,
    pub users_service: UserService,
    pub posts_service: PostsService,
    pub groups_service: GroupsService,
    pub follows_service: FollowService,
    pub feed_service: FeedService,
}

#[tokio::main]
async fn main() {
    let config = Config::init();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            println!("✅ Connection to the database is successful!");
            pool
        }
        Err(err) => {
            println!("🔥 Failed to connect to the database: {:?}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = sqlx::migrate!().run(&pool).await {
        println!("🔥 Failed to run migrations: {:?}", err);
        std::process::exit(1);
    }

    let repo = Arc::new(PostgresRepo::new(pool.clone()));

    let app_state = AppState {
        db_pool: pool,
        config: config.clone(),
        auth_service: AuthService::new(repo.clone(), config.jwt_secret.clone(), config.jwt_maxage),
        users_service: UserService::new(repo.clone()),
        posts_service: PostsService::new(repo.clone(), repo.clone(), repo.clone()),
        groups_service: GroupsService::new(repo.clone()),
        follows_service: FollowService::new(repo.clone(), repo.clone()),
        feed_service: FeedService::new(repo.clone(), repo.clone(), repo.clone(), repo),
    };

    let app = create_router(Arc::new(app_state)).layer(configure_cors());

    let listener = match tokio::net::TcpListener::bind(format!("[::]:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            println!("🔥 Failed to bind port {}: {:?}", config.port, err);
            std::process::exit(1);
        }
    };

    if let Err(err) = axum::serve(listener, app).await {
        println!("🔥 Server error: {:?}", err);
        std::process::exit(1);
    }
}
