//! User types.

use serde::{Deserialize, Serialize};

use campus_board_core::{AccessLevel, Department, Email, UserId};

/// A registered board user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User's database ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Access level, determining the single department the user may write to.
    pub access: AccessLevel,
}

impl User {
    /// The department this user may author posts in, if any.
    #[must_use]
    pub const fn department(&self) -> Option<Department> {
        Department::from_access(self.access)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_department_follows_access_level() {
        let user = User {
            id: UserId::new(1),
            email: Email::parse("prog@university.edu").unwrap(),
            access: AccessLevel::new(15),
        };
        assert_eq!(user.department(), Some(Department::Prog));
    }

    #[test]
    fn test_unmapped_access_has_no_department() {
        let user = User {
            id: UserId::new(2),
            email: Email::parse("guest@university.edu").unwrap(),
            access: AccessLevel::new(99),
        };
        assert_eq!(user.department(), None);
    }
}
