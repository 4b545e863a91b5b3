//! Cross-reference signal - raised when an audited subject is blacklisted

use serde::Serialize;

use crate::entities::{AuditEntry, BlacklistEntry, ListType};

/// Emitted by the audit workflow when the audited document number matches a
/// blacklist entry. Consumers surface it to a human reviewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossReferenceSignal {
    /// Id of the matching blacklist entry
    pub entry_id: i64,
    pub reason: String,
    pub list_type: ListType,
    /// Tag of the staff member who filed the audit
    pub requester_tag: String,
    pub server_id: String,
    /// Resolved by the notifier when the guild is reachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    /// The audited document number that matched
    pub document_number: String,
}

impl CrossReferenceSignal {
    pub fn new(audit: &AuditEntry, entry: &BlacklistEntry) -> Self {
        Self {
            entry_id: entry.id,
            reason: entry.reason.clone(),
            list_type: entry.list_type,
            requester_tag: audit.requester_tag.clone(),
            server_id: audit.server_id.clone(),
            server_name: None,
            document_number: audit.employee_passport.clone(),
        }
    }

    /// Server label for display: the resolved name, or the raw id
    pub fn server_label(&self) -> &str {
        self.server_name.as_deref().unwrap_or(&self.server_id)
    }
}
