//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use campus_board_core::{AccessLevel, Department, Email, UserId};

use crate::models::user::User;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
/// Written as one value at login, so the id, email, and access level can
/// never get out of sync with each other; absence of the value is the
/// normal anonymous state, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Access level copied from the user record at login time.
    pub access: AccessLevel,
}

impl CurrentUser {
    /// The department this identity may author posts in, if any.
    #[must_use]
    pub const fn department(&self) -> Option<Department> {
        Department::from_access(self.access)
    }
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            access: user.access,
        }
    }
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_carries_access_from_user() {
        let user = User {
            id: UserId::new(4),
            email: Email::parse("tf@university.edu").unwrap(),
            access: AccessLevel::new(19),
        };
        let current = CurrentUser::from(user);
        assert_eq!(current.department(), Some(Department::Tf));
    }
}
