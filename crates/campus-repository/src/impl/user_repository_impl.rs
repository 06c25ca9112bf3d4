//! `UserRepositoryImpl` — the user persistence adapter.
//!
//! Implements the [`UserRepository`] domain interface on top of a
//! [`UserDao`]. This layer owns the record-to-domain normalization and
//! the pagination math; everything else delegates straight to the DAO.
//!
//! [`UserRepository`]: crate::traits::UserRepository
//! [`UserDao`]: crate::dao::UserDao

use crate::dao::{UserDao, UserFilter, UserRecord};
use crate::traits::UserRepository;
use async_trait::async_trait;
use campus_core::{
    offset, CampusError, CampusResult, Gender, NewUser, Repository, SearchPage, UpdateUser, User,
    UserCriteria, UserId, UserRole, DEFAULT_PAGE_SIZE,
};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Repository implementation that delegates persistence to a
/// [`UserDao`] and normalizes every record it hands back.
///
/// [`UserDao`]: crate::dao::UserDao
#[derive(Component)]
#[shaku(interface = UserRepository)]
pub struct UserRepositoryImpl {
    /// Persistence client.
    #[shaku(inject)]
    user_dao: Arc<dyn UserDao>,

    /// Fixed page size for `get_by`.
    #[shaku(default = DEFAULT_PAGE_SIZE)]
    page_size: u32,
}

impl UserRepositoryImpl {
    /// Creates a new `UserRepositoryImpl` with the given DAO and page size.
    #[must_use]
    pub fn new(user_dao: Arc<dyn UserDao>, page_size: u32) -> Self {
        Self {
            user_dao,
            page_size,
        }
    }
}

#[async_trait]
impl Repository<UserId, User, NewUser, UpdateUser, UserCriteria> for UserRepositoryImpl {
    async fn add(&self, data: NewUser) -> CampusResult<User> {
        debug!("Repository: add user {}", data.email);
        let record = self.user_dao.create(&data).await?;
        User::try_from(record)
    }

    async fn get(&self, id: UserId) -> CampusResult<Option<User>> {
        debug!("Repository: get user {}", id);
        let record = self.user_dao.find_unique(id.into_inner()).await?;
        record.map(User::try_from).transpose()
    }

    async fn delete(&self, id: UserId) -> CampusResult<User> {
        debug!("Repository: delete user {}", id);
        let record = self.user_dao.delete(id.into_inner()).await?;
        User::try_from(record)
    }

    async fn update(&self, data: UpdateUser) -> CampusResult<User> {
        debug!("Repository: update user {}", data.id);
        let record = self.user_dao.update(&data).await?;
        User::try_from(record)
    }

    async fn get_by(
        &self,
        criteria: UserCriteria,
        page: u32,
    ) -> CampusResult<SearchPage<User, UserCriteria>> {
        debug!("Repository: get_by page={}", page);

        let filter = UserFilter::from(&criteria);

        // Count and page fetch have no ordering dependency.
        let (total_records, records) = tokio::try_join!(
            self.user_dao.count(&filter),
            self.user_dao
                .find_many(&filter, self.page_size, offset(self.page_size, page)),
        )?;

        let results = records
            .into_iter()
            .map(User::try_from)
            .collect::<CampusResult<Vec<_>>>()?;

        Ok(SearchPage::new(
            page,
            total_records,
            self.page_size,
            criteria,
            results,
        ))
    }
}

impl UserRepository for UserRepositoryImpl {}

/// Normalizes a persistence record into the domain entity.
///
/// NULL optional columns become `None`; enum codes decode into their
/// typed values, failing with a mapping error on unknown codes.
impl TryFrom<UserRecord> for User {
    type Error = CampusError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        let gender = record
            .gender
            .map(|code| Gender::from_code(&code).ok_or_else(|| CampusError::mapping("gender", code)))
            .transpose()?;

        let role = UserRole::from_code(&record.role)
            .ok_or_else(|| CampusError::mapping("role", record.role.clone()))?;

        Ok(User {
            id: UserId::from_i64(record.id),
            first_name: record.first_name,
            mid_name: record.mid_name,
            father_lastname: record.father_lastname,
            mother_lastname: record.mother_lastname,
            email: record.email,
            tuition: record.tuition,
            gender,
            role,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl std::fmt::Debug for UserRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRepositoryImpl")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
