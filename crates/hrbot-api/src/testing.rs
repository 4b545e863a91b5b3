//! Shared fixtures for the handler tests

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use ed25519_dalek::{Signer, SigningKey};
use hrbot_common::AppConfig;
use hrbot_core::{CrossReferenceNotifier, CrossReferenceSignal, DomainError};

use crate::middleware::REQUEST_TIMEOUT;
use crate::server::create_app_state;
use crate::state::AppState;

pub const AUDIT_CHANNEL: &str = "1200000000000000001";
pub const AUDIT_ROLE: &str = "1300000000000000001";
pub const BLACKLIST_ROLE: &str = "1300000000000000002";

pub struct SilentNotifier;

#[async_trait]
impl CrossReferenceNotifier for SilentNotifier {
    async fn notify(&self, _signal: &CrossReferenceSignal) -> Result<(), DomainError> {
        Ok(())
    }
}

pub fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[9u8; 32])
}

/// Never finishes within a request's lifetime
pub struct StalledNotifier;

#[async_trait]
impl CrossReferenceNotifier for StalledNotifier {
    async fn notify(&self, _signal: &CrossReferenceSignal) -> Result<(), DomainError> {
        tokio::time::sleep(REQUEST_TIMEOUT * 6).await;
        Ok(())
    }
}

pub async fn test_state() -> AppState {
    test_state_with(Arc::new(SilentNotifier)).await
}

pub async fn test_state_with(notifier: Arc<dyn CrossReferenceNotifier>) -> AppState {
    let public_key = hex::encode(signing_key().verifying_key().to_bytes());
    let vars = HashMap::from([
        ("DISCORD_TOKEN", "bot-token".to_string()),
        ("DISCORD_APPLICATION_ID", "1100000000000000001".to_string()),
        ("DISCORD_PUBLIC_KEY", public_key),
        ("DATABASE_URL", "sqlite::memory:".to_string()),
        ("AUDIT_CHANNEL_ID", AUDIT_CHANNEL.to_string()),
        ("AUDIT_ROLE_ID", AUDIT_ROLE.to_string()),
        ("BLACKLIST_ROLE_ID", BLACKLIST_ROLE.to_string()),
    ]);
    let config = AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap();

    create_app_state(config, notifier).await.unwrap()
}

/// POST /interactions signed with [`signing_key`]
pub fn signed_request(body: &str) -> Request<Body> {
    let timestamp = "1700000000";
    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body.as_bytes());
    let signature = signing_key().sign(&message);

    Request::builder()
        .method("POST")
        .uri("/interactions")
        .header("content-type", "application/json")
        .header("x-signature-ed25519", hex::encode(signature.to_bytes()))
        .header("x-signature-timestamp", timestamp)
        .body(Body::from(body.to_string()))
        .unwrap()
}
