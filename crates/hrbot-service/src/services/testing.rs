//! Shared fixtures for the service tests

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use hrbot_core::{CrossReferenceNotifier, CrossReferenceSignal, DomainError};
use hrbot_db::{create_pool, ensure_schema, DatabaseConfig};

use super::context::ServiceContext;

/// Keeps every signal it is handed
#[derive(Default)]
pub struct RecordingNotifier {
    signals: Mutex<Vec<CrossReferenceSignal>>,
}

impl RecordingNotifier {
    pub fn signals(&self) -> Vec<CrossReferenceSignal> {
        self.signals.lock().unwrap().clone()
    }

    /// Signals recorded once `count` have arrived, or after ~1s
    pub async fn wait_for(&self, count: usize) -> Vec<CrossReferenceSignal> {
        for _ in 0..100 {
            if self.signals().len() >= count {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.signals()
    }
}

#[async_trait]
impl CrossReferenceNotifier for RecordingNotifier {
    async fn notify(&self, signal: &CrossReferenceSignal) -> Result<(), DomainError> {
        self.signals.lock().unwrap().push(signal.clone());
        Ok(())
    }
}

/// Always fails as if the channel were gone
pub struct FailingNotifier;

#[async_trait]
impl CrossReferenceNotifier for FailingNotifier {
    async fn notify(&self, _signal: &CrossReferenceSignal) -> Result<(), DomainError> {
        Err(DomainError::NotificationTargetUnavailable("999".into()))
    }
}

/// Hangs far longer than any caller would wait
pub struct StalledNotifier;

#[async_trait]
impl CrossReferenceNotifier for StalledNotifier {
    async fn notify(&self, _signal: &CrossReferenceSignal) -> Result<(), DomainError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    }
}

/// Fresh in-memory store with the schema in place
pub async fn memory_context(notifier: Arc<dyn CrossReferenceNotifier>) -> ServiceContext {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    ServiceContext::sqlite(pool, notifier)
}
