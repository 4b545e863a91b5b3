//! Notifier port - delivers cross-reference signals to reviewers

use async_trait::async_trait;

use crate::error::DomainError;
use crate::events::CrossReferenceSignal;

#[async_trait]
pub trait CrossReferenceNotifier: Send + Sync {
    /// Deliver a signal to the reviewer channel.
    ///
    /// Implementations with no configured target return `Ok(())` without
    /// doing anything. An unreachable target is reported as
    /// [`DomainError::NotificationTargetUnavailable`].
    async fn notify(&self, signal: &CrossReferenceSignal) -> Result<(), DomainError>;
}
