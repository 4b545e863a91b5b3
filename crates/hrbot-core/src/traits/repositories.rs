//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{AuditEntry, BlacklistEntry, NewAuditEntry, NewBlacklistEntry};
use crate::error::DomainError;
use crate::value_objects::BlacklistQuery;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Blacklist Repository
// ============================================================================

#[async_trait]
pub trait BlacklistRepository: Send + Sync {
    /// First matching entry; keys are tried in `MATCH_PRIORITY` order and the
    /// earliest-inserted entry wins within a key
    async fn find(&self, query: &BlacklistQuery) -> RepoResult<Option<BlacklistEntry>>;

    /// Most recent entries first
    async fn list(&self, limit: i64) -> RepoResult<Vec<BlacklistEntry>>;

    /// Insert an entry, stamping `added_at` with the current local time
    async fn create(&self, entry: &NewBlacklistEntry) -> RepoResult<BlacklistEntry>;

    /// Delete every entry whose tag OR document number equals a supplied key.
    /// Returns the number of rows removed; zero is not an error.
    async fn delete(&self, query: &BlacklistQuery) -> RepoResult<u64>;
}

// ============================================================================
// Audit Repository
// ============================================================================

#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Find audit by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<AuditEntry>>;

    /// All audits filed for a document number, oldest first
    async fn find_by_passport(&self, passport: &str) -> RepoResult<Vec<AuditEntry>>;

    /// Append an audit record
    async fn create(&self, entry: &NewAuditEntry) -> RepoResult<AuditEntry>;
}
