pub mod comments;
pub mod groups;
pub mod posts;
pub mod response;
pub mod users;
