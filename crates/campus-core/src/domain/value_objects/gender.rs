//! Gender value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional gender of a user, stored as an uppercase string code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Returns the storage code for this gender.
    #[must_use]
    pub const fn as_code(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }

    /// Decodes a storage code. Returns `None` for unknown codes; the
    /// caller decides whether that is a fatal mapping error.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MALE" => Some(Self::Male),
            "FEMALE" => Some(Self::Female),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }

    /// Returns all known genders.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Male, Self::Female, Self::Other]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}
