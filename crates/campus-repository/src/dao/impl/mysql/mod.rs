//! MySQL DAO implementations.

pub mod user_dao_impl;

pub use user_dao_impl::MySqlUserDaoImpl;
