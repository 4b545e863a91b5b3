//! Request DTOs
//!
//! Field names follow the slash command option names, so a command's options
//! deserialize straight into these structs. Free text is never validated.

use serde::Deserialize;

// ============================================================================
// Blacklist Requests
// ============================================================================

/// `/blacklist` input
#[derive(Debug, Clone, Deserialize)]
pub struct AddBlacklistRequest {
    #[serde(rename = "discord_tag", default)]
    pub tag: Option<String>,

    #[serde(rename = "passport", default)]
    pub document_number: Option<String>,

    /// `faction` or `general`
    pub list_type: String,

    pub reason: String,

    #[serde(default)]
    pub expiry_date: Option<String>,
}

// ============================================================================
// Audit Requests
// ============================================================================

/// `/audit` input
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAuditRequest {
    pub id_number: String,
    pub employee_name: String,
    pub employee_passport: String,
    pub action_type: String,
    pub action_reason: String,
}
