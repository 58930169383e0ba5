//! Schema management
//!
//! Provides:
//! - Embedded SQL migrations
//! - Idempotent application at startup with a `schema_version` ledger
//! - SHA-256 checksums that detect edits to already-applied migrations

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::apply_migrations;
