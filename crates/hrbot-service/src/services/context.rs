//! Service context - dependency container for services
//!
//! Holds the store pool, the repositories and the cross-reference notifier.
//! Passed explicitly to every workflow; nothing here is global.

use std::sync::Arc;

use hrbot_core::traits::{AuditRepository, BlacklistRepository, CrossReferenceNotifier};
use hrbot_core::CrossReferenceSignal;
use hrbot_db::{SqliteAuditRepository, SqliteBlacklistRepository, SqlitePool};
use tokio::task::JoinHandle;
use tracing::{warn, Instrument};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: SqlitePool,

    // Repositories
    blacklist_repo: Arc<dyn BlacklistRepository>,
    audit_repo: Arc<dyn AuditRepository>,

    // Outbound
    notifier: Arc<dyn CrossReferenceNotifier>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: SqlitePool,
        blacklist_repo: Arc<dyn BlacklistRepository>,
        audit_repo: Arc<dyn AuditRepository>,
        notifier: Arc<dyn CrossReferenceNotifier>,
    ) -> Self {
        Self {
            pool,
            blacklist_repo,
            audit_repo,
            notifier,
        }
    }

    /// Wire the SQLite repositories over `pool`
    pub fn sqlite(pool: SqlitePool, notifier: Arc<dyn CrossReferenceNotifier>) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(SqliteBlacklistRepository::new(pool.clone())),
            Arc::new(SqliteAuditRepository::new(pool)),
            notifier,
        )
    }

    // === Database Pool ===

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // === Repositories ===

    /// Get the blacklist repository
    pub fn blacklist_repo(&self) -> &dyn BlacklistRepository {
        self.blacklist_repo.as_ref()
    }

    /// Get the audit repository
    pub fn audit_repo(&self) -> &dyn AuditRepository {
        self.audit_repo.as_ref()
    }

    // === Outbound ===

    /// Hand a signal to the notifier on a background task
    ///
    /// Returns immediately; the notifier's REST calls never hold up the caller.
    /// Failures are logged and dropped.
    pub fn dispatch_notification(&self, signal: CrossReferenceSignal) -> JoinHandle<()> {
        let notifier = Arc::clone(&self.notifier);

        tokio::spawn(
            async move {
                if let Err(e) = notifier.notify(&signal).await {
                    warn!(
                        entry_id = signal.entry_id,
                        error = %e,
                        "Cross-reference notification failed"
                    );
                }
            }
            .in_current_span(),
        )
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("repositories", &"...")
            .field("notifier", &"...")
            .finish()
    }
}
