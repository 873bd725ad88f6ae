//! Post repository for per-department partitions.
//!
//! Each department has its own physical post table. The partition a query
//! addresses is chosen by the [`Department`] enum, never by request input:
//! `Department::table()` yields a `&'static str` from the closed set, and
//! that is the only value ever interpolated into query text. Post fields
//! themselves are always bound as parameters.

use chrono::Utc;
use sqlx::PgPool;

use campus_board_core::{Department, PostId};

use super::RepositoryError;
use crate::models::post::{NewPost, Post};

/// Repository for department-partitioned post operations.
pub struct PostRepository<'a> {
    pool: &'a PgPool,
}

/// Quote a partition name for use as a SQL identifier.
///
/// Required because two historical department slugs contain hyphens.
fn partition_ident(department: Department) -> String {
    format!("\"{}\"", department.table())
}

impl<'a> PostRepository<'a> {
    /// Create a new post repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every post in the department's partition, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, including when
    /// the department's partition has never been provisioned.
    pub async fn list(&self, department: Department) -> Result<Vec<Post>, RepositoryError> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT id, header, author, content, date FROM {} ORDER BY id",
            partition_ident(department)
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Get a single post by id from the department's partition.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the id is absent from the
    /// partition, `RepositoryError::Database` if the query fails.
    pub async fn find(&self, id: PostId, department: Department) -> Result<Post, RepositoryError> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "SELECT id, header, author, content, date FROM {} WHERE id = $1",
            partition_ident(department)
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        post.ok_or(RepositoryError::NotFound)
    }

    /// Insert a post into the department's partition.
    ///
    /// The publication date is assigned here, not taken from the caller.
    /// Returns the storage-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        post: &NewPost,
        department: Department,
    ) -> Result<PostId, RepositoryError> {
        let date = Utc::now().format("%Y-%m-%d").to_string();

        let id = sqlx::query_scalar::<_, PostId>(&format!(
            "INSERT INTO {} (header, author, content, date) VALUES ($1, $2, $3, $4) RETURNING id",
            partition_ident(department)
        ))
        .bind(&post.header)
        .bind(post.author)
        .bind(&post.content)
        .bind(&date)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Replace the header, author, and content of an existing post.
    ///
    /// The publication date is left as originally assigned.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the id does not exist in the
    /// partition, `RepositoryError::Database` if the update fails.
    pub async fn update(&self, post: &Post, department: Department) -> Result<(), RepositoryError> {
        let result = sqlx::query(&format!(
            "UPDATE {} SET header = $1, author = $2, content = $3 WHERE id = $4",
            partition_ident(department)
        ))
        .bind(&post.header)
        .bind(post.author)
        .bind(&post.content)
        .bind(post.id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a post from the department's partition.
    ///
    /// Deleting an id that does not exist is a no-op, not an error, so the
    /// operation is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(
        &self,
        id: PostId,
        department: Department,
    ) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "DELETE FROM {} WHERE id = $1",
            partition_ident(department)
        ))
        .bind(id)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
