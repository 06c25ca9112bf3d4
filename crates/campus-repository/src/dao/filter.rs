//! Storage-level filter types for the paginated search.

use campus_core::UserCriteria;

/// Predicate applied to a single string column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringPredicate {
    /// Case-insensitive substring match.
    Contains(String),
    /// Exact match on the stored value.
    Equals(String),
}

impl StringPredicate {
    /// Converts an optional filter value into a substring predicate.
    ///
    /// `None` in, `None` out, so an absent filter imposes no predicate.
    #[must_use]
    pub fn contains(value: Option<String>) -> Option<Self> {
        value.map(Self::Contains)
    }

    /// Converts an optional filter value into an exact-match predicate.
    #[must_use]
    pub fn equals(value: Option<String>) -> Option<Self> {
        value.map(Self::Equals)
    }

    /// Evaluates the predicate against a candidate value.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Contains(needle) => candidate.to_lowercase().contains(&needle.to_lowercase()),
            Self::Equals(expected) => candidate == expected,
        }
    }
}

/// Per-column predicates for a user query. Columns without a predicate
/// are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub first_name: Option<StringPredicate>,
    pub mid_name: Option<StringPredicate>,
    pub father_lastname: Option<StringPredicate>,
    pub mother_lastname: Option<StringPredicate>,
    pub email: Option<StringPredicate>,
    pub tuition: Option<StringPredicate>,
    pub gender: Option<StringPredicate>,
    pub role: Option<StringPredicate>,
}

impl From<&UserCriteria> for UserFilter {
    fn from(criteria: &UserCriteria) -> Self {
        Self {
            first_name: StringPredicate::contains(criteria.first_name.clone()),
            mid_name: StringPredicate::contains(criteria.mid_name.clone()),
            father_lastname: StringPredicate::contains(criteria.father_lastname.clone()),
            mother_lastname: StringPredicate::contains(criteria.mother_lastname.clone()),
            email: StringPredicate::contains(criteria.email.clone()),
            tuition: StringPredicate::contains(criteria.tuition.clone()),
            gender: StringPredicate::equals(criteria.gender.map(|g| g.as_code().to_string())),
            role: StringPredicate::equals(criteria.role.map(|r| r.as_code().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::{Gender, UserRole};

    #[test]
    fn test_absent_filter_imposes_no_predicate() {
        assert_eq!(StringPredicate::contains(None), None);
        assert_eq!(StringPredicate::equals(None), None);

        let filter = UserFilter::from(&UserCriteria::default());
        assert_eq!(filter, UserFilter::default());
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let predicate = StringPredicate::Contains("tor".to_string());
        assert!(predicate.matches("Torres"));
        assert!(predicate.matches("pastOR"));
        assert!(!predicate.matches("Lima"));
    }

    #[test]
    fn test_equals_is_exact() {
        let predicate = StringPredicate::Equals("MALE".to_string());
        assert!(predicate.matches("MALE"));
        assert!(!predicate.matches("male"));
        assert!(!predicate.matches("FEMALE"));
    }

    #[test]
    fn test_criteria_translation() {
        let criteria = UserCriteria {
            email: Some("@example.com".to_string()),
            gender: Some(Gender::Other),
            role: Some(UserRole::Professor),
            ..UserCriteria::default()
        };
        let filter = UserFilter::from(&criteria);

        assert_eq!(
            filter.email,
            Some(StringPredicate::Contains("@example.com".to_string()))
        );
        assert_eq!(
            filter.gender,
            Some(StringPredicate::Equals("OTHER".to_string()))
        );
        assert_eq!(
            filter.role,
            Some(StringPredicate::Equals("PROFESSOR".to_string()))
        );
        assert_eq!(filter.first_name, None);
    }
}
