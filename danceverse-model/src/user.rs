//! Roles and the signed-in user record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Academy role of a signed-in user.
///
/// An anonymous visitor has no role; the session models that as
/// `Option<Role>` rather than a fourth variant so "signed in" is a type-level
/// fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Student,
    Trainer,
    Admin,
}

impl Role {
    /// Display name given to the stub user created on login
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Student => "Student User",
            Self::Trainer => "Alex K",
            Self::Admin => "Admin Terminal",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Trainer => write!(f, "trainer"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

/// The signed-in user. Only ever a stub: there is no real authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// "u_session_" followed by 9 random characters
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_approved: bool,
    pub joined_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Trainer).unwrap(), "\"TRAINER\"");
        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Role::Student.display_name(), "Student User");
        assert_eq!(Role::Trainer.display_name(), "Alex K");
        assert_eq!(Role::Admin.display_name(), "Admin Terminal");
    }
}
