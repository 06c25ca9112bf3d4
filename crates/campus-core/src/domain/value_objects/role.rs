//! User role value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a user, stored as an uppercase string code.
///
/// Unlike the optional [`Gender`], every user carries exactly one role.
///
/// [`Gender`]: super::Gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Administrator with full access.
    Admin,
    /// Teaching staff.
    Professor,
    /// Enrolled student.
    Student,
}

impl UserRole {
    /// Returns the storage code for this role.
    #[must_use]
    pub const fn as_code(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Professor => "PROFESSOR",
            Self::Student => "STUDENT",
        }
    }

    /// Decodes a storage code. Returns `None` for unknown codes; the
    /// caller decides whether that is a fatal mapping error.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ADMIN" => Some(Self::Admin),
            "PROFESSOR" => Some(Self::Professor),
            "STUDENT" => Some(Self::Student),
            _ => None,
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Admin, Self::Professor, Self::Student]
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}
