//! Raw persistence shape of a user row.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row representation of a user.
///
/// Optional columns are NULLable, enums are their string codes. The
/// repository layer converts this into the domain `User`; nothing above
/// the DAO should consume it directly.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub mid_name: Option<String>,
    pub father_lastname: String,
    pub mother_lastname: Option<String>,
    pub email: String,
    pub tuition: String,
    pub gender: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
