//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, signing interaction
//! payloads and recording cross-reference alerts.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use ed25519_dalek::{Signer, SigningKey};
use hrbot_api::{create_app, create_app_state};
use hrbot_common::AppConfig;
use hrbot_core::{CrossReferenceNotifier, CrossReferenceSignal, DomainError};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const APPLICATION_ID: &str = "1100000000000000001";
pub const AUDIT_CHANNEL: &str = "1200000000000000001";
pub const OTHER_CHANNEL: &str = "1200000000000000099";
pub const AUDIT_ROLE: &str = "1300000000000000001";
pub const BLACKLIST_ROLE: &str = "1300000000000000002";

const SIGNATURE_TIMESTAMP: &str = "1700000000";

/// Key the test application signs interactions with
pub fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[42u8; 32])
}

/// Notifier that keeps every alert it is asked to post
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    signals: Arc<Mutex<Vec<CrossReferenceSignal>>>,
}

impl RecordingNotifier {
    pub fn signals(&self) -> Vec<CrossReferenceSignal> {
        self.signals.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Alerts are posted in the background; wait up to ~2s for `count` of them
    pub async fn wait_for(&self, count: usize) -> Vec<CrossReferenceSignal> {
        for _ in 0..200 {
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
        if let Ok(mut signals) = self.signals.lock() {
            signals.push(signal.clone());
        }
        Ok(())
    }
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub notifier: RecordingNotifier,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server backed by a fresh in-memory store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let notifier = RecordingNotifier::default();
        let state = create_app_state(config, Arc::new(notifier.clone())).await?;
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            notifier,
            _handle: handle,
        })
    }

    /// Get the base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// POST an interaction signed with [`signing_key`]
    pub async fn interact(&self, payload: &Value) -> Result<Response> {
        let body = payload.to_string();
        let mut message = SIGNATURE_TIMESTAMP.as_bytes().to_vec();
        message.extend_from_slice(body.as_bytes());
        let signature = signing_key().sign(&message);

        self.post_raw(body, Some(&hex::encode(signature.to_bytes())))
            .await
    }

    /// POST an interaction body with an arbitrary (or no) signature
    pub async fn post_raw(&self, body: String, signature: Option<&str>) -> Result<Response> {
        let url = format!("{}/interactions", self.base_url());
        let mut request = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .body(body);
        if let Some(signature) = signature {
            request = request
                .header("x-signature-ed25519", signature)
                .header("x-signature-timestamp", SIGNATURE_TIMESTAMP);
        }
        Ok(request.send().await?)
    }

    /// POST a signed interaction and parse the 200 response
    pub async fn interact_ok(&self, payload: &Value) -> Result<Value> {
        let response = self.interact(payload).await?;
        assert_json(response, StatusCode::OK).await
    }
}

/// Create a test configuration with an in-memory store and the test key
pub fn test_config() -> Result<AppConfig> {
    let vars = HashMap::from([
        ("DISCORD_TOKEN", "integration-token".to_string()),
        ("DISCORD_APPLICATION_ID", APPLICATION_ID.to_string()),
        (
            "DISCORD_PUBLIC_KEY",
            hex::encode(signing_key().verifying_key().to_bytes()),
        ),
        ("DATABASE_URL", "sqlite::memory:".to_string()),
        ("AUDIT_CHANNEL_ID", AUDIT_CHANNEL.to_string()),
        ("AUDIT_ROLE_ID", AUDIT_ROLE.to_string()),
        ("BLACKLIST_ROLE_ID", BLACKLIST_ROLE.to_string()),
        ("REGISTER_COMMANDS", "false".to_string()),
    ]);

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
