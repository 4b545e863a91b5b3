//! Error handling utilities for repositories

use hrbot_core::error::DomainError;
use hrbot_core::value_objects::KeyKind;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Column of the `blacklist` table addressed by a lookup key
pub const fn blacklist_column(kind: KeyKind) -> &'static str {
    match kind {
        KeyKind::Tag => "discord_tag",
        KeyKind::DocumentNumber => "passport_number",
    }
}
