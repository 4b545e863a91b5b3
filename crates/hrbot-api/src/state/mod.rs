//! Application state
//!
//! Holds the shared state for the Axum application: the service context, the
//! configuration, the interaction signature verifier and the access policy.

use std::sync::Arc;

use hrbot_common::AppConfig;
use hrbot_discord::SignatureVerifier;
use hrbot_service::{AccessPolicy, ServiceContext};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Verifies `X-Signature-Ed25519` on inbound interactions
    verifier: Arc<SignatureVerifier>,
    access: AccessPolicy,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        verifier: SignatureVerifier,
    ) -> Self {
        let access = AccessPolicy::new(config.access);
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            verifier: Arc::new(verifier),
            access,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the interaction signature verifier
    pub fn verifier(&self) -> &SignatureVerifier {
        &self.verifier
    }

    /// Get the command access policy
    pub fn access(&self) -> &AccessPolicy {
        &self.access
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("access", &self.access)
            .finish()
    }
}
