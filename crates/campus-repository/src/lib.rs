//! # Campus Repository
//!
//! Data access for the `User` entity, layered the same way top to
//! bottom:
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn UserRepository>   (domain interface)
//! UserRepositoryImpl             (adapter — normalization + pagination)
//!   ↓  Arc<dyn UserDao>          (persistence client interface)
//! MySqlUserDaoImpl               (MySQL / SQLx)
//!   ↓
//! MySQL
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                    ← UserRepository trait
//!   impl/
//!     mod.rs
//!     user_repository_impl.rs    ← UserRepositoryImpl
//!   dao/
//!     record.rs                  ← UserRecord (raw persistence shape)
//!     filter.rs                  ← StringPredicate / UserFilter
//!     user_dao.rs                ← UserDao trait
//!     impl/
//!       mod.rs
//!       mysql/
//!         user_dao_impl.rs       ← MySqlUserDaoImpl
//! ```
//!
//! The repository owns the record-to-domain normalization; the DAO
//! traffics exclusively in storage shapes.

pub mod dao;
pub mod pool;
pub mod traits;
pub mod r#impl;

pub use dao::{MySqlUserDaoImpl, StringPredicate, UserDao, UserFilter, UserRecord};
pub use pool::*;
pub use traits::*;
pub use r#impl::UserRepositoryImpl;
