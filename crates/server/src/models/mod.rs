//! Domain models for the board server.

pub mod post;
pub mod session;
pub mod user;

pub use post::{NewPost, Post};
pub use session::{CurrentUser, keys as session_keys};
pub use user::User;
