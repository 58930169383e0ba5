//! Error handling for shopline-store
//!
//! Wraps shopline-core ExError with store-specific helpers

use shopline_core::errors::{ExError, ExErrorKind};
use shopline_core::EntityId;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error for an already-applied migration
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create an error for an entity whose row vanished between load and save
pub fn row_missing(entity: &'static str, id: EntityId) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op("update")
        .with_entity(entity)
        .with_entity_id(id)
        .with_message(format!("No {} row with ID {}", entity, id))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rusqlite_is_persistence() {
        let err = from_rusqlite(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.op(), Some("sqlite"));
    }

    #[test]
    fn test_row_missing_is_not_found() {
        let err = row_missing("product", 12);
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.entity(), Some("product"));
        assert_eq!(err.entity_id(), Some(12));
    }
}
