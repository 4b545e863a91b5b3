//! Interaction payload builders
//!
//! Payloads carry only the fields the bot reads, shaped like Discord's.

use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::helpers::APPLICATION_ID;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub const GUILD_ID: &str = "900000000000000001";

/// Discord's handshake ping
pub fn ping() -> Value {
    json!({
        "id": unique_suffix().to_string(),
        "application_id": APPLICATION_ID,
        "type": 1,
        "token": "ping-token",
    })
}

/// The guild member invoking a command or pressing a button
#[derive(Debug, Clone)]
pub struct Invoker {
    pub username: String,
    pub roles: Vec<String>,
}

impl Invoker {
    pub fn new(username: &str, roles: &[&str]) -> Self {
        Self {
            username: username.to_string(),
            roles: roles.iter().map(|r| (*r).to_string()).collect(),
        }
    }

    fn member(&self) -> Value {
        json!({
            "user": {
                "id": (7000 + unique_suffix()).to_string(),
                "username": self.username,
                "discriminator": "0",
            },
            "roles": self.roles,
        })
    }
}

/// A slash command interaction
pub fn command(name: &str, channel_id: &str, invoker: &Invoker, options: &[(&str, &str)]) -> Value {
    let options: Vec<Value> = options
        .iter()
        .map(|(name, value)| json!({ "name": name, "type": 3, "value": value }))
        .collect();

    json!({
        "id": unique_suffix().to_string(),
        "application_id": APPLICATION_ID,
        "type": 2,
        "token": "command-token",
        "guild_id": GUILD_ID,
        "channel_id": channel_id,
        "member": invoker.member(),
        "data": { "name": name, "options": options },
    })
}

/// A button press on a message carrying `embeds`
pub fn button(custom_id: &str, invoker: &Invoker, embeds: Value) -> Value {
    json!({
        "id": unique_suffix().to_string(),
        "application_id": APPLICATION_ID,
        "type": 3,
        "token": "component-token",
        "guild_id": GUILD_ID,
        "channel_id": "1400000000000000001",
        "member": invoker.member(),
        "data": { "custom_id": custom_id, "component_type": 2 },
        "message": {
            "id": "1500000000000000001",
            "channel_id": "1400000000000000001",
            "embeds": embeds,
        },
    })
}

/// Options of a complete `/audit`
pub fn audit_options<'a>(passport: &'a str, action_type: &'a str) -> Vec<(&'static str, &'a str)> {
    vec![
        ("id_number", "77"),
        ("employee_name", "John Doe"),
        ("employee_passport", passport),
        ("action_type", action_type),
        ("action_reason", "transfer from another unit"),
    ]
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Health check bodies
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Deserialize)]
pub struct HealthChecks {
    pub database: String,
}
