//! Storage tests for the per-department post partitions.
//!
//! These exercise the repository against a real `PostgreSQL` database:
//! create/find round-trips, the NotFound contract on missing ids, delete
//! idempotency, and the storage error raised by a partition that was never
//! provisioned. All tests are `#[ignore]`d; see the crate docs for how to
//! point them at a database.

#![allow(clippy::unwrap_used)]

use campus_board_core::{Department, PostId, UserId};
use campus_board_integration_tests::board_pool;
use campus_board_server::db::{PostRepository, RepositoryError};
use campus_board_server::models::{NewPost, Post};

fn seminar_post() -> NewPost {
    NewPost {
        header: "Seminar".to_string(),
        author: UserId::new(1),
        content: "Room 3107, Friday".to_string(),
    }
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database via DATABASE_URL"]
async fn test_create_then_find_roundtrip() {
    let pool = board_pool().await;
    let repo = PostRepository::new(&pool);

    let id = repo.create(&seminar_post(), Department::Prog).await.unwrap();

    let post = repo.find(id, Department::Prog).await.unwrap();
    assert_eq!(post.id, id);
    assert_eq!(post.header, "Seminar");
    assert_eq!(post.author, UserId::new(1));
    assert_eq!(post.content, "Room 3107, Friday");
    // The date is storage-assigned at create time, never caller-supplied
    assert!(!post.date.is_empty());

    repo.delete(id, Department::Prog).await.unwrap();
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database via DATABASE_URL"]
async fn test_update_missing_id_is_not_found() {
    let pool = board_pool().await;
    let repo = PostRepository::new(&pool);

    let post = Post {
        id: PostId::new(i32::MAX),
        header: "Seminar".to_string(),
        author: UserId::new(1),
        content: "Room 3107, Friday".to_string(),
        date: String::new(),
    };

    let err = repo.update(&post, Department::Prog).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database via DATABASE_URL"]
async fn test_update_keeps_the_stored_date() {
    let pool = board_pool().await;
    let repo = PostRepository::new(&pool);

    let id = repo.create(&seminar_post(), Department::Prog).await.unwrap();
    let original = repo.find(id, Department::Prog).await.unwrap();

    let edited = Post {
        id,
        header: "Seminar moved".to_string(),
        author: UserId::new(1),
        content: "Room 2105, Monday".to_string(),
        date: "1970-01-01".to_string(),
    };
    repo.update(&edited, Department::Prog).await.unwrap();

    let stored = repo.find(id, Department::Prog).await.unwrap();
    assert_eq!(stored.header, "Seminar moved");
    assert_eq!(stored.date, original.date);

    repo.delete(id, Department::Prog).await.unwrap();
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database via DATABASE_URL"]
async fn test_delete_twice_is_a_no_op() {
    let pool = board_pool().await;
    let repo = PostRepository::new(&pool);

    let id = repo.create(&seminar_post(), Department::Prog).await.unwrap();

    repo.delete(id, Department::Prog).await.unwrap();
    // Second delete of the same id succeeds without touching anything
    repo.delete(id, Department::Prog).await.unwrap();

    let err = repo.find(id, Department::Prog).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[tokio::test]
#[ignore = "Requires a PostgreSQL database via DATABASE_URL"]
async fn test_unprovisioned_partition_is_a_storage_error() {
    let pool = board_pool().await;
    let repo = PostRepository::new(&pool);

    // This department is in the closed set but its partition is deliberately
    // absent from the migrations
    let err = repo.list(Department::VychSyst).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Database(_)));
}
