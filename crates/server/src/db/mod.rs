//! Database operations for the board `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `users` - Site authentication: `(id, email, encrypted_password, access)`
//! - `sessions` - Tower-sessions storage
//! - one post partition per department, named by the department slug and
//!   shaped `(id, header, author, content, date)`
//!
//! Partition names are never taken from request input: every repository
//! operation is parameterized by the [`campus_board_core::Department`] enum,
//! so only the closed set of known slugs can reach query text.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run at startup
//! via `sqlx::migrate!`.

pub mod posts;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use posts::PostRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx. Also covers access to an unprovisioned
    /// department partition (the relation does not exist).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// The acquire timeout bounds how long a request can block waiting for a
/// connection; the store itself imposes no statement timeout.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
