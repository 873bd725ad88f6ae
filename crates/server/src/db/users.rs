//! User repository for database operations.
//!
//! Users are provisioned directly in the database by the department office;
//! there is no self-registration flow.

use sqlx::PgPool;

use campus_board_core::{AccessLevel, Email, UserId};

use super::RepositoryError;
use crate::models::user::User;

/// Raw `users` row, decoded before validation.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    email: String,
    encrypted_password: String,
    access: i32,
}

impl UserRow {
    fn into_user(self) -> Result<(User, String), RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok((
            User {
                id: UserId::new(self.id),
                email,
                access: AccessLevel::new(self.access),
            },
            self.encrypted_password,
        ))
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .get_password_hash(email)
            .await?
            .map(|(user, _hash)| user))
    }

    /// Get a user together with their password hash by email.
    ///
    /// Returns `None` if no user has that email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored email is invalid.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, email, encrypted_password, access
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }
}
