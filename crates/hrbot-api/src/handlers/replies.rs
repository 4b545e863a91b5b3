//! Embeds and ephemeral texts sent back to the invoker

use hrbot_core::value_objects::{format_added_at, format_audit_date};
use hrbot_core::{AuditEntry, BlacklistEntry, DomainError};
use hrbot_discord::types::colors;
use hrbot_discord::{DiscordEmbed, InteractionCallbackData, InteractionResponse};
use hrbot_service::ServiceError;
use tracing::error;

pub const UNKNOWN_COMMAND: &str = "Unknown command.";
pub const MISSING_OPTION: &str = "A required option is missing.";
pub const NO_PERMISSION: &str = "You do not have permission to use this command.";
pub const LOOKUP_USAGE: &str = "Provide a Discord tag or a passport number.";
pub const OPERATION_FAILED: &str = "The operation failed. Please try again later.";
pub const UNKNOWN_ACTION: &str = "This button is no longer valid.";

/// Public summary of a recorded audit
pub fn audit_summary(audit: &AuditEntry) -> InteractionResponse {
    let embed = DiscordEmbed::new("HR audit")
        .color(colors::BLUE)
        .field("Employee", &audit.requester_tag, true)
        .field("ID number", &audit.id_number, true)
        .field("Full name", &audit.employee_name, false)
        .field("Passport", &audit.employee_passport, true)
        .field("Action type", &audit.action_type, true)
        .field("Reason", &audit.action_reason, false)
        .footer(format!("Date: {}", format_audit_date(&audit.audit_date)));

    InteractionResponse::message(InteractionCallbackData::embed(embed))
}

/// Ephemeral confirmation of a new blacklist entry
pub fn blacklist_added(entry: &BlacklistEntry) -> InteractionResponse {
    let mut embed = DiscordEmbed::new("Added to blacklist")
        .description("The user was added to the blacklist.")
        .color(colors::RED)
        .field("Discord", entry.tag.as_deref().unwrap_or_default(), true)
        .field("Passport", entry.document_number.as_deref().unwrap_or_default(), true)
        .field("List type", entry.list_type.display_name(), true)
        .field("Reason", &entry.reason, false);

    if let Some(expiry) = &entry.expiry_date {
        embed = embed.field("Expires", expiry, true);
    }

    InteractionResponse::message(InteractionCallbackData::embed(embed).ephemeral())
}

/// Ephemeral result of a direct lookup
pub fn lookup_result(entry: Option<&BlacklistEntry>) -> InteractionResponse {
    let embed = match entry {
        Some(entry) => {
            let mut embed = DiscordEmbed::new("Blacklisted")
                .color(colors::ORANGE)
                .field("Discord", entry.tag.as_deref().unwrap_or_default(), true)
                .field("Passport", entry.document_number.as_deref().unwrap_or_default(), true)
                .field("List type", entry.list_type.display_name(), true)
                .field("Reason", &entry.reason, false);
            if let Some(expiry) = &entry.expiry_date {
                embed = embed.field("Expires", expiry, true);
            }
            embed
                .field("Added by", &entry.added_by, true)
                .footer(format!(
                    "Entry #{} added {}",
                    entry.id,
                    format_added_at(&entry.added_at)
                ))
        }
        None => DiscordEmbed::new("Not blacklisted")
            .description("No blacklist entry matches.")
            .color(colors::GREEN),
    };

    InteractionResponse::message(InteractionCallbackData::embed(embed).ephemeral())
}

pub fn removed(count: u64) -> InteractionResponse {
    let text = match count {
        0 => "No matching blacklist entries.".to_string(),
        1 => "Removed 1 blacklist entry.".to_string(),
        n => format!("Removed {n} blacklist entries."),
    };
    InteractionResponse::ephemeral(text)
}

/// Ephemeral reply for a failed command; store failures are logged
pub fn failure(command: &str, err: &ServiceError) -> InteractionResponse {
    let text = match err {
        ServiceError::WrongChannel { expected } => {
            format!("This command can only be used in {}.", expected.channel_mention())
        }
        ServiceError::PermissionDenied { .. } => NO_PERMISSION.to_string(),
        ServiceError::Domain(DomainError::EmptyBlacklistQuery) => LOOKUP_USAGE.to_string(),
        ServiceError::Domain(e @ DomainError::InvalidListType(_)) => e.to_string(),
        ServiceError::Validation(_) => MISSING_OPTION.to_string(),
        other => {
            error!(command, error = %other, code = other.error_code(), "Command failed");
            OPERATION_FAILED.to_string()
        }
    };

    InteractionResponse::ephemeral(text)
}
