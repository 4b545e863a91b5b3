//! # hrbot-core
//!
//! Domain layer containing the blacklist and audit entities, the blacklist lookup
//! query, repository and notifier traits, and the cross-reference signal.
//! This crate has zero dependencies on infrastructure (database, Discord, web framework).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{AuditEntry, BlacklistEntry, ListType, NewAuditEntry, NewBlacklistEntry};
pub use error::DomainError;
pub use events::CrossReferenceSignal;
pub use traits::{AuditRepository, BlacklistRepository, CrossReferenceNotifier, RepoResult};
pub use value_objects::{
    BlacklistQuery, KeyKind, Snowflake, SnowflakeParseError, AUDIT_DATE_FORMAT,
    BLACKLIST_ADDED_AT_FORMAT, MATCH_PRIORITY,
};
