//! Result type alias for Campus Registry.

use crate::CampusError;

/// A specialized `Result` type for Campus Registry operations.
pub type CampusResult<T> = Result<T, CampusError>;
