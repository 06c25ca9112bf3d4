//! MySQL user DAO implementation.

use crate::dao::{StringPredicate, UserDao, UserFilter, UserRecord};
use crate::DatabasePoolInterface;
use async_trait::async_trait;
use campus_core::{CampusError, CampusResult, NewUser, UpdateUser};
use shaku::Component;
use sqlx::{MySql, QueryBuilder};
use std::sync::Arc;
use tracing::debug;

/// MySQL implementation of [`UserDao`] over SQLx.
#[derive(Component, Clone)]
#[shaku(interface = UserDao)]
pub struct MySqlUserDaoImpl {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserDaoImpl {
    /// Creates a new MySQL user DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: i64) -> CampusResult<Option<UserRecord>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, first_name, mid_name, father_lastname, mother_lastname,
                   email, tuition, gender, role, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(record)
    }
}

#[async_trait]
impl UserDao for MySqlUserDaoImpl {
    async fn create(&self, data: &NewUser) -> CampusResult<UserRecord> {
        debug!("Inserting user: {}", data.email);

        let result = sqlx::query(
            r#"
            INSERT INTO users (first_name, mid_name, father_lastname, mother_lastname,
                               email, tuition, gender, role)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.mid_name)
        .bind(&data.father_lastname)
        .bind(&data.mother_lastname)
        .bind(&data.email)
        .bind(&data.tuition)
        .bind(data.gender.map(|g| g.as_code()))
        .bind(data.role.as_code())
        .execute(self.pool.inner())
        .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| CampusError::internal("generated id exceeds the signed 64-bit range"))?;

        // MySQL doesn't support RETURNING, so insert then select
        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| CampusError::internal("failed to fetch inserted user"))
    }

    async fn find_unique(&self, id: i64) -> CampusResult<Option<UserRecord>> {
        debug!("Fetching user by id: {}", id);
        self.fetch_by_id(id).await
    }

    async fn delete(&self, id: i64) -> CampusResult<UserRecord> {
        debug!("Deleting user: {}", id);

        let record = self
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| CampusError::not_found("user", id))?;

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(record)
    }

    async fn update(&self, data: &UpdateUser) -> CampusResult<UserRecord> {
        let id = data.id.into_inner();
        debug!("Updating user: {}", id);

        // rows_affected is 0 both for a missing row and for a no-op
        // update under MySQL, so existence is checked up front.
        let existing = self
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| CampusError::not_found("user", id))?;

        if data.is_empty() {
            return Ok(existing);
        }

        let mut builder = QueryBuilder::<MySql>::new("UPDATE users SET ");
        {
            let mut assignments = builder.separated(", ");
            if let Some(value) = &data.first_name {
                assignments.push("first_name = ").push_bind_unseparated(value.clone());
            }
            if let Some(value) = &data.mid_name {
                assignments.push("mid_name = ").push_bind_unseparated(value.clone());
            }
            if let Some(value) = &data.father_lastname {
                assignments.push("father_lastname = ").push_bind_unseparated(value.clone());
            }
            if let Some(value) = &data.mother_lastname {
                assignments.push("mother_lastname = ").push_bind_unseparated(value.clone());
            }
            if let Some(value) = &data.email {
                assignments.push("email = ").push_bind_unseparated(value.clone());
            }
            if let Some(value) = &data.tuition {
                assignments.push("tuition = ").push_bind_unseparated(value.clone());
            }
            if let Some(value) = data.gender {
                assignments.push("gender = ").push_bind_unseparated(value.as_code());
            }
            if let Some(value) = data.role {
                assignments.push("role = ").push_bind_unseparated(value.as_code());
            }
        }
        builder.push(" WHERE id = ").push_bind(id);

        builder.build().execute(self.pool.inner()).await?;

        // MySQL doesn't support RETURNING, so update then select
        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| CampusError::internal("failed to fetch updated user"))
    }

    async fn count(&self, filter: &UserFilter) -> CampusResult<u64> {
        let mut builder = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM users");
        push_where(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(self.pool.inner())
            .await?;

        Ok(total as u64)
    }

    async fn find_many(
        &self,
        filter: &UserFilter,
        limit: u32,
        offset: u64,
    ) -> CampusResult<Vec<UserRecord>> {
        debug!("Fetching users, limit: {}, offset: {}", limit, offset);

        let mut builder = QueryBuilder::<MySql>::new(
            "SELECT id, first_name, mid_name, father_lastname, mother_lastname, \
             email, tuition, gender, role, created_at, updated_at FROM users",
        );
        push_where(&mut builder, filter);
        builder.push(" ORDER BY id ASC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(offset as i64);

        let records = builder
            .build_query_as::<UserRecord>()
            .fetch_all(self.pool.inner())
            .await?;

        Ok(records)
    }
}

/// Appends a WHERE clause for every present predicate.
fn push_where(builder: &mut QueryBuilder<'_, MySql>, filter: &UserFilter) {
    let columns = [
        ("first_name", filter.first_name.as_ref()),
        ("mid_name", filter.mid_name.as_ref()),
        ("father_lastname", filter.father_lastname.as_ref()),
        ("mother_lastname", filter.mother_lastname.as_ref()),
        ("email", filter.email.as_ref()),
        ("tuition", filter.tuition.as_ref()),
        ("gender", filter.gender.as_ref()),
        ("role", filter.role.as_ref()),
    ];

    let mut prefix = " WHERE ";
    for (column, predicate) in columns {
        let Some(predicate) = predicate else { continue };
        builder.push(prefix);
        prefix = " AND ";
        match predicate {
            StringPredicate::Contains(value) => {
                builder
                    .push("LOWER(")
                    .push(column)
                    .push(") LIKE ")
                    .push_bind(like_pattern(value));
            }
            StringPredicate::Equals(value) => {
                builder.push(column).push(" = ").push_bind(value.clone());
            }
        }
    }
}

/// Builds a lowercased `%needle%` pattern, escaping LIKE wildcards.
fn like_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped.to_lowercase())
}

impl std::fmt::Debug for MySqlUserDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserDaoImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_and_lowercases() {
        assert_eq!(like_pattern("Tor"), "%tor%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn test_push_where_empty_filter_adds_nothing() {
        let mut builder = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM users");
        push_where(&mut builder, &UserFilter::default());
        assert_eq!(builder.sql(), "SELECT COUNT(*) FROM users");
    }

    #[test]
    fn test_push_where_joins_predicates_with_and() {
        let filter = UserFilter {
            first_name: Some(StringPredicate::Contains("an".to_string())),
            role: Some(StringPredicate::Equals("STUDENT".to_string())),
            ..UserFilter::default()
        };
        let mut builder = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM users");
        push_where(&mut builder, &filter);
        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM users WHERE LOWER(first_name) LIKE ? AND role = ?"
        );
    }
}
