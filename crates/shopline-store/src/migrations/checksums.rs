//! Checksum validation for migrations

use sha2::{Digest, Sha256};

/// Compute the hex SHA-256 checksum of a migration's SQL
pub fn compute_checksum(sql: &str) -> String {
    hex::encode(Sha256::digest(sql.as_bytes()))
}
