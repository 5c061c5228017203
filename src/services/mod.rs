pub mod auth;
pub mod authz;
pub mod feed;
pub mod follows;
pub mod groups;
pub mod posts;
pub mod user;
