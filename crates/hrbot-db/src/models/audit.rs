//! Audit database model

use sqlx::FromRow;

/// Database model for the `audits` table
#[derive(Debug, Clone, FromRow)]
pub struct AuditModel {
    pub id: i64,
    pub discord_tag: Option<String>,
    pub id_number: Option<String>,
    pub employee_name: Option<String>,
    pub employee_passport: Option<String>,
    pub action_type: Option<String>,
    pub action_reason: Option<String>,
    /// `DD.MM.YYYY HH:MM:SS`
    pub audit_date: Option<String>,
    pub server_id: Option<String>,
}
