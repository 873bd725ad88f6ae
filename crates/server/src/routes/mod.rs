//! HTTP route handlers for the board server.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Home page (department directory)
//! GET  /health            - Health check
//! GET  /{department}      - Department board (slug validated against the
//!                           fixed table; unknown slugs bounce home)
//!
//! # Posts (write/edit/delete require auth + a mapped department)
//! GET  /posts/write       - Compose form
//! POST /posts/save        - Create, or update when the form carries an id
//! POST /posts/edit        - Load a post into the compose form
//! POST /posts/delete      - Delete by id (idempotent)
//!
//! # Auth
//! GET  /auth/login        - Login page
//! POST /auth/login        - Login action
//! POST /auth/logout       - Logout action
//!
//! # Mail (requires auth)
//! GET  /mail              - Compose notification email
//! POST /mail/send         - Send notification email
//! ```

pub mod auth;
pub mod home;
pub mod mail;
pub mod posts;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the post routes router.
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/write", get(posts::write_page))
        .route("/save", post(posts::save))
        .route("/edit", post(posts::edit))
        .route("/delete", post(posts::delete))
}

/// Create the mail routes router.
pub fn mail_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(mail::compose_page))
        .route("/send", post(mail::send))
}

/// Create all routes for the board.
///
/// The department capture is registered alongside the literal routes; axum
/// gives literal segments precedence, so `/posts` and friends are never
/// swallowed by the capture.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Post routes
        .nest("/posts", post_routes())
        // Auth routes
        .nest("/auth", auth_routes())
        // Mail routes
        .nest("/mail", mail_routes())
        // Department boards
        .route("/{department}", get(posts::index))
}
