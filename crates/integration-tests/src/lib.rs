//! Integration tests for Campus Board.
//!
//! # Running Tests
//!
//! The storage tests need a `PostgreSQL` database and are `#[ignore]`d by
//! default:
//!
//! ```bash
//! # Point at a disposable database
//! export DATABASE_URL=postgres://localhost/campus_board_test
//!
//! # Run the storage tests
//! cargo test -p campus-board-integration-tests -- --ignored
//! ```
//!
//! Migrations are applied by the pool helper, so a freshly created empty
//! database is enough.

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;
use sqlx::PgPool;

/// Connect to the test database and bring its schema up to date.
///
/// Reads `BOARD_DATABASE_URL` with a fallback to `DATABASE_URL`, matching the
/// server's own configuration loading.
///
/// # Panics
///
/// Panics if neither variable is set or the database is unreachable; the
/// callers are `#[ignore]`d tests that only run when a database was
/// deliberately provided.
pub async fn board_pool() -> PgPool {
    let url = std::env::var("BOARD_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("BOARD_DATABASE_URL or DATABASE_URL must be set for storage tests");

    let pool = campus_board_server::db::create_pool(&SecretString::from(url))
        .await
        .expect("failed to connect to the test database");

    sqlx::migrate!("../server/migrations")
        .run(&pool)
        .await
        .expect("failed to apply migrations to the test database");

    pool
}
