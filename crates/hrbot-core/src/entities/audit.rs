//! Audit entity - a logged personnel action

use chrono::NaiveDateTime;
use serde::Serialize;

/// Persisted audit record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub id: i64,
    /// Tag of the staff member who filed the audit
    pub requester_tag: String,
    /// Staff credential/badge number, free text
    pub id_number: String,
    pub employee_name: String,
    /// Subject's document number; cross-referenced against the blacklist
    pub employee_passport: String,
    pub action_type: String,
    pub action_reason: String,
    pub audit_date: NaiveDateTime,
    pub server_id: String,
}

/// Audit record before insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditEntry {
    pub requester_tag: String,
    pub id_number: String,
    pub employee_name: String,
    pub employee_passport: String,
    pub action_type: String,
    pub action_reason: String,
    pub audit_date: NaiveDateTime,
    pub server_id: String,
}

impl NewAuditEntry {
    /// Attach the store-assigned id
    pub fn into_entry(self, id: i64) -> AuditEntry {
        AuditEntry {
            id,
            requester_tag: self.requester_tag,
            id_number: self.id_number,
            employee_name: self.employee_name,
            employee_passport: self.employee_passport,
            action_type: self.action_type,
            action_reason: self.action_reason,
            audit_date: self.audit_date,
            server_id: self.server_id,
        }
    }
}
