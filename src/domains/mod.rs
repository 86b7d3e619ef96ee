pub mod album;
pub mod post;
pub mod user;
