pub mod auth;
pub mod groups;
pub mod posts;
pub mod profiles;
