//! End-to-end tests against a live HTTP listener
//!
//! Each server gets its own in-memory SQLite store, so tests are independent
//! and need no external services.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, TestServer, AUDIT_CHANNEL, AUDIT_ROLE,
    BLACKLIST_ROLE, OTHER_CHANNEL,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

fn officer() -> Invoker {
    Invoker::new("officer", &[AUDIT_ROLE])
}

fn registrar() -> Invoker {
    Invoker::new("registrar", &[BLACKLIST_ROLE])
}

fn embed_field<'a>(response: &'a Value, name: &str) -> Option<&'a str> {
    response["data"]["embeds"][0]["fields"]
        .as_array()?
        .iter()
        .find(|f| f["name"] == name)
        .and_then(|f| f["value"].as_str())
}

async fn add_to_blacklist(server: &TestServer, tag: &str, passport: &str, reason: &str) -> Value {
    let payload = command(
        "blacklist",
        OTHER_CHANNEL,
        &registrar(),
        &[
            ("discord_tag", tag),
            ("passport", passport),
            ("list_type", "general"),
            ("reason", reason),
        ],
    );
    server.interact_ok(&payload).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: ReadinessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "ready");
    assert_eq!(body.checks.database, "healthy");
}

// ============================================================================
// Signature Tests
// ============================================================================

#[tokio::test]
async fn test_ping_answered_with_pong() {
    let server = TestServer::start().await.unwrap();
    let response = server.interact_ok(&ping()).await.unwrap();
    assert_eq!(response, json!({ "type": 1 }));
}

#[tokio::test]
async fn test_unsigned_request_rejected() {
    let server = TestServer::start().await.unwrap();
    let response = server.post_raw(ping().to_string(), None).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_SIGNATURE");
}

#[tokio::test]
async fn test_forged_signature_rejected() {
    let server = TestServer::start().await.unwrap();
    let forged = "00".repeat(64);
    let response = server
        .post_raw(ping().to_string(), Some(&forged))
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_SIGNATURE");
}

#[tokio::test]
async fn test_malformed_payload_rejected() {
    let server = TestServer::start().await.unwrap();
    let response = server.interact(&json!({ "type": 1 })).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Audit Tests
// ============================================================================

#[tokio::test]
async fn test_audit_posts_public_summary() {
    let server = TestServer::start().await.unwrap();
    let payload = command("audit", AUDIT_CHANNEL, &officer(), &audit_options("P12345", "hire"));

    let response = server.interact_ok(&payload).await.unwrap();

    assert_eq!(response["type"], 4);
    assert!(response["data"]["flags"].is_null());
    assert_eq!(response["data"]["embeds"][0]["title"], "HR audit");
    assert_eq!(embed_field(&response, "Employee"), Some("officer"));
    assert_eq!(embed_field(&response, "Passport"), Some("P12345"));
    assert_eq!(embed_field(&response, "Action type"), Some("hire"));
    assert!(server.notifier.signals().is_empty());
}

#[tokio::test]
async fn test_audit_outside_channel_is_refused_and_not_cross_referenced() {
    let server = TestServer::start().await.unwrap();
    add_to_blacklist(&server, "user#2222", "A0002", "theft").await;

    let payload = command("audit", OTHER_CHANNEL, &officer(), &audit_options("A0002", "hire"));
    let response = server.interact_ok(&payload).await.unwrap();

    assert_eq!(response["data"]["flags"], 64);
    let content = response["data"]["content"].as_str().unwrap();
    assert!(content.contains(&format!("<#{AUDIT_CHANNEL}>")));
    assert!(server.notifier.signals().is_empty());
}

#[tokio::test]
async fn test_audit_requires_role() {
    let server = TestServer::start().await.unwrap();
    let outsider = Invoker::new("outsider", &[]);
    let payload = command("audit", AUDIT_CHANNEL, &outsider, &audit_options("P1", "hire"));

    let response = server.interact_ok(&payload).await.unwrap();

    assert_eq!(
        response["data"]["content"],
        "You do not have permission to use this command."
    );
}

// ============================================================================
// Blacklist Tests
// ============================================================================

#[tokio::test]
async fn test_blacklist_requires_role() {
    let server = TestServer::start().await.unwrap();
    let payload = command(
        "blacklist",
        OTHER_CHANNEL,
        &officer(),
        &[
            ("discord_tag", "user#1"),
            ("passport", "X1"),
            ("list_type", "general"),
            ("reason", "r"),
        ],
    );

    let response = server.interact_ok(&payload).await.unwrap();
    assert_eq!(
        response["data"]["content"],
        "You do not have permission to use this command."
    );

    let check = command("blacklist_check", OTHER_CHANNEL, &registrar(), &[("passport", "X1")]);
    let response = server.interact_ok(&check).await.unwrap();
    assert_eq!(response["data"]["embeds"][0]["title"], "Not blacklisted");
}

#[tokio::test]
async fn test_blacklist_add_and_check() {
    let server = TestServer::start().await.unwrap();
    let suffix = unique_suffix();
    let tag = format!("user#{suffix}");

    let added = add_to_blacklist(&server, &tag, "B0001", "fraud").await;
    assert_eq!(added["data"]["flags"], 64);
    assert_eq!(added["data"]["embeds"][0]["title"], "Added to blacklist");
    assert_eq!(embed_field(&added, "List type"), Some("General"));

    let check = command("blacklist_check", OTHER_CHANNEL, &registrar(), &[("discord_tag", tag.as_str())]);
    let response = server.interact_ok(&check).await.unwrap();
    assert_eq!(response["data"]["embeds"][0]["title"], "Blacklisted");
    assert_eq!(embed_field(&response, "Passport"), Some("B0001"));
    assert_eq!(embed_field(&response, "Reason"), Some("fraud"));
    assert_eq!(embed_field(&response, "Added by"), Some("registrar"));
}

#[tokio::test]
async fn test_blacklist_rejects_unknown_list_type() {
    let server = TestServer::start().await.unwrap();
    let payload = command(
        "blacklist",
        OTHER_CHANNEL,
        &registrar(),
        &[
            ("discord_tag", "user#3"),
            ("passport", "X3"),
            ("list_type", "clan"),
            ("reason", "r"),
        ],
    );

    let response = server.interact_ok(&payload).await.unwrap();
    let content = response["data"]["content"].as_str().unwrap();
    assert!(content.contains("clan"));
}

#[tokio::test]
async fn test_blacklist_check_without_keys() {
    let server = TestServer::start().await.unwrap();
    let payload = command("blacklist_check", OTHER_CHANNEL, &registrar(), &[]);

    let response = server.interact_ok(&payload).await.unwrap();
    assert_eq!(
        response["data"]["content"],
        "Provide a Discord tag or a passport number."
    );
}

#[tokio::test]
async fn test_blacklist_remove_reports_count() {
    let server = TestServer::start().await.unwrap();
    add_to_blacklist(&server, "dup#0001", "C0001", "first").await;
    add_to_blacklist(&server, "dup#0001", "C0002", "second").await;

    let remove = command("blacklist_remove", OTHER_CHANNEL, &registrar(), &[("discord_tag", "dup#0001")]);
    let response = server.interact_ok(&remove).await.unwrap();
    assert_eq!(response["data"]["content"], "Removed 2 blacklist entries.");

    let response = server.interact_ok(&remove).await.unwrap();
    assert_eq!(response["data"]["content"], "No matching blacklist entries.");
}

// ============================================================================
// Cross-reference Tests
// ============================================================================

#[tokio::test]
async fn test_blacklisted_passport_raises_alert_and_remove_button_clears_it() {
    let server = TestServer::start().await.unwrap();
    add_to_blacklist(&server, "user#1111", "A0001", "fraud").await;

    // The audit still succeeds; the alert goes to the notification channel
    let audit = command("audit", AUDIT_CHANNEL, &officer(), &audit_options("A0001", "hire"));
    let response = server.interact_ok(&audit).await.unwrap();
    assert_eq!(response["data"]["embeds"][0]["title"], "HR audit");

    let signals = server.notifier.wait_for(1).await;
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].reason, "fraud");
    assert_eq!(signals[0].document_number, "A0001");
    assert_eq!(signals[0].requester_tag, "officer");

    let alert_embeds = json!([{ "title": "Blacklist match", "fields": [
        { "name": "Passport", "value": "A0001" },
        { "name": "Reason", "value": "fraud" },
    ]}]);
    let press = button("xref:remove:A0001", &registrar(), alert_embeds);
    let response = server.interact_ok(&press).await.unwrap();

    assert_eq!(response["type"], 7);
    assert_eq!(
        response["data"]["content"],
        "Removed from the blacklist by registrar (1 entries)."
    );
    assert_eq!(response["data"]["embeds"][0]["title"], "Blacklist match");
    let buttons = response["data"]["components"][0]["components"]
        .as_array()
        .unwrap();
    assert_eq!(buttons.len(), 2);
    assert!(buttons.iter().all(|b| b["disabled"] == true));

    let check = command("blacklist_check", OTHER_CHANNEL, &registrar(), &[("passport", "A0001")]);
    let response = server.interact_ok(&check).await.unwrap();
    assert_eq!(response["data"]["embeds"][0]["title"], "Not blacklisted");
}

#[tokio::test]
async fn test_allow_button_keeps_entry() {
    let server = TestServer::start().await.unwrap();
    add_to_blacklist(&server, "user#4444", "D0001", "forgery").await;

    let press = button("xref:allow:D0001", &registrar(), json!([]));
    let response = server.interact_ok(&press).await.unwrap();
    assert_eq!(response["type"], 7);
    assert_eq!(
        response["data"]["content"],
        "Allowed despite the blacklist by registrar."
    );

    let check = command("blacklist_check", OTHER_CHANNEL, &registrar(), &[("passport", "D0001")]);
    let response = server.interact_ok(&check).await.unwrap();
    assert_eq!(response["data"]["embeds"][0]["title"], "Blacklisted");
}

#[tokio::test]
async fn test_alert_buttons_require_blacklist_role() {
    let server = TestServer::start().await.unwrap();
    add_to_blacklist(&server, "user#5555", "E0001", "bribery").await;

    let press = button("xref:remove:E0001", &officer(), json!([]));
    let response = server.interact_ok(&press).await.unwrap();
    assert_eq!(response["type"], 4);
    assert_eq!(response["data"]["flags"], 64);

    let check = command("blacklist_check", OTHER_CHANNEL, &registrar(), &[("passport", "E0001")]);
    let response = server.interact_ok(&check).await.unwrap();
    assert_eq!(response["data"]["embeds"][0]["title"], "Blacklisted");
}

#[tokio::test]
async fn test_unknown_button_is_ignored() {
    let server = TestServer::start().await.unwrap();
    let press = button("poll:vote:1", &registrar(), json!([]));

    let response = server.interact_ok(&press).await.unwrap();
    assert_eq!(response["data"]["content"], "This button is no longer valid.");
}
