//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use vent_core::error::DomainError;
use vent_core::value_objects::Snowflake;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "post not found" error
pub fn post_not_found(id: Snowflake) -> DomainError {
    DomainError::PostNotFound(id)
}
