//! User entity and its DTOs.

use super::super::value_objects::{Gender, UserRole};
use crate::{Entity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::rules::not_blank;

/// User entity in its domain shape: optional fields are `None` rather
/// than storage NULLs, enums are typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// First given name.
    pub first_name: String,

    /// Middle name, if any.
    pub mid_name: Option<String>,

    /// Paternal surname.
    pub father_lastname: String,

    /// Maternal surname, if any.
    pub mother_lastname: Option<String>,

    /// Email address.
    pub email: String,

    /// Tuition (enrollment) number.
    pub tuition: String,

    /// Gender, if declared.
    pub gender: Option<Gender>,

    /// Role within the institution.
    pub role: UserRole,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Returns the user's full name, middle name included when present.
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut name = self.first_name.clone();
        if let Some(mid) = &self.mid_name {
            name.push(' ');
            name.push_str(mid);
        }
        name.push(' ');
        name.push_str(&self.father_lastname);
        if let Some(mother) = &self.mother_lastname {
            name.push(' ');
            name.push_str(mother);
        }
        name
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}

/// Fields required to create a [`User`]. The id and timestamps are
/// generated by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(custom(function = not_blank), length(max = 64))]
    pub first_name: String,

    #[validate(length(max = 64))]
    pub mid_name: Option<String>,

    #[validate(custom(function = not_blank), length(max = 64))]
    pub father_lastname: String,

    #[validate(length(max = 64))]
    pub mother_lastname: Option<String>,

    #[validate(email)]
    pub email: String,

    #[validate(custom(function = not_blank), length(max = 32))]
    pub tuition: String,

    pub gender: Option<Gender>,

    pub role: UserRole,
}

/// Partial update of a [`User`] by id.
///
/// `None` leaves the field unchanged; there is no channel to clear an
/// optional field back to NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUser {
    pub id: UserId,
    pub first_name: Option<String>,
    pub mid_name: Option<String>,
    pub father_lastname: Option<String>,
    pub mother_lastname: Option<String>,
    pub email: Option<String>,
    pub tuition: Option<String>,
    pub gender: Option<Gender>,
    pub role: Option<UserRole>,
}

impl UpdateUser {
    /// Creates an update for `id` with every field left unchanged.
    #[must_use]
    pub fn empty(id: UserId) -> Self {
        Self {
            id,
            first_name: None,
            mid_name: None,
            father_lastname: None,
            mother_lastname: None,
            email: None,
            tuition: None,
            gender: None,
            role: None,
        }
    }

    /// Returns true when no field is being changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.mid_name.is_none()
            && self.father_lastname.is_none()
            && self.mother_lastname.is_none()
            && self.email.is_none()
            && self.tuition.is_none()
            && self.gender.is_none()
            && self.role.is_none()
    }
}

/// Filter criteria for the paginated user search.
///
/// Every present string field matches as a case-insensitive substring;
/// `gender` and `role` match exactly. Absent fields impose no
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCriteria {
    pub first_name: Option<String>,
    pub mid_name: Option<String>,
    pub father_lastname: Option<String>,
    pub mother_lastname: Option<String>,
    pub email: Option<String>,
    pub tuition: Option<String>,
    pub gender: Option<Gender>,
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidateExt;
    use crate::CampusError;

    fn new_user(email: &str, tuition: &str) -> NewUser {
        NewUser {
            first_name: "Ana".to_string(),
            mid_name: None,
            father_lastname: "Torres".to_string(),
            mother_lastname: Some("Lima".to_string()),
            email: email.to_string(),
            tuition: tuition.to_string(),
            gender: Some(Gender::Female),
            role: UserRole::Student,
        }
    }

    #[test]
    fn test_new_user_valid() {
        assert!(new_user("ana@example.com", "A01234").validate_request().is_ok());
    }

    #[test]
    fn test_new_user_rejects_bad_email() {
        let err = new_user("not-an-email", "A01234")
            .validate_request()
            .unwrap_err();
        assert!(matches!(err, CampusError::Validation(_)));
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_new_user_rejects_blank_name() {
        let mut user = new_user("ana@example.com", "A01234");
        user.first_name = "   ".to_string();
        assert!(user.validate_request().is_err());
    }

    #[test]
    fn test_full_name_with_optional_parts() {
        let user = User {
            id: UserId::from_i64(1),
            first_name: "Ana".to_string(),
            mid_name: Some("Maria".to_string()),
            father_lastname: "Torres".to_string(),
            mother_lastname: Some("Lima".to_string()),
            email: "ana@example.com".to_string(),
            tuition: "A01234".to_string(),
            gender: None,
            role: UserRole::Student,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(user.full_name(), "Ana Maria Torres Lima");
        assert_eq!(user.id(), &UserId::from_i64(1));
    }

    #[test]
    fn test_full_name_without_optional_parts() {
        let user = User {
            id: UserId::from_i64(2),
            first_name: "Juan".to_string(),
            mid_name: None,
            father_lastname: "Perez".to_string(),
            mother_lastname: None,
            email: "juan@example.com".to_string(),
            tuition: "A05678".to_string(),
            gender: Some(Gender::Male),
            role: UserRole::Professor,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(user.full_name(), "Juan Perez");
    }

    #[test]
    fn test_update_user_is_empty() {
        let update = UpdateUser::empty(UserId::from_i64(1));
        assert!(update.is_empty());

        let update = UpdateUser {
            email: Some("new@example.com".to_string()),
            ..UpdateUser::empty(UserId::from_i64(1))
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_criteria_default_is_unconstrained() {
        let criteria = UserCriteria::default();
        assert_eq!(criteria.first_name, None);
        assert_eq!(criteria.gender, None);
        assert_eq!(criteria.role, None);
    }
}
