//! Persistence client abstraction for user data.
//!
//! Trait and storage-shape definitions live here; implementations are
//! organized by technology under `impl/`.

pub mod filter;
pub mod record;
pub mod user_dao;
pub mod r#impl;

pub use filter::{StringPredicate, UserFilter};
pub use record::UserRecord;
pub use user_dao::UserDao;
pub use r#impl::MySqlUserDaoImpl;

#[cfg(test)]
pub use user_dao::MockUserDao;
