//! Post types.

use serde::{Deserialize, Serialize};

use campus_board_core::{PostId, UserId};

/// A bulletin-board post within one department partition.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    /// Storage-assigned id, unique within the partition.
    pub id: PostId,
    /// Post headline.
    pub header: String,
    /// Id of the authoring user.
    pub author: UserId,
    /// Post body.
    pub content: String,
    /// Publication date, assigned by the server at create time.
    pub date: String,
}

/// A post as submitted by a write form, before storage assigns an id.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Post headline.
    pub header: String,
    /// Id of the authoring user.
    pub author: UserId,
    /// Post body.
    pub content: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_post_serde_roundtrip() {
        let post = Post {
            id: PostId::new(1),
            header: "Seminar".to_string(),
            author: UserId::new(7),
            content: "Room 3107, Friday".to_string(),
            date: "2026-08-30".to_string(),
        };

        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, post.id);
        assert_eq!(back.header, post.header);
        assert_eq!(back.author, post.author);
    }
}
