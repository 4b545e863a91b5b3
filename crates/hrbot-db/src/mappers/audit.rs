//! Audit model -> entity mapper

use hrbot_core::entities::AuditEntry;
use hrbot_core::error::DomainError;
use hrbot_core::value_objects::parse_audit_date;

use crate::models::AuditModel;

impl TryFrom<AuditModel> for AuditEntry {
    type Error = DomainError;

    fn try_from(model: AuditModel) -> Result<Self, Self::Error> {
        let audit_date = parse_audit_date(model.audit_date.as_deref().unwrap_or_default())?;

        Ok(AuditEntry {
            id: model.id,
            requester_tag: model.discord_tag.unwrap_or_default(),
            id_number: model.id_number.unwrap_or_default(),
            employee_name: model.employee_name.unwrap_or_default(),
            employee_passport: model.employee_passport.unwrap_or_default(),
            action_type: model.action_type.unwrap_or_default(),
            action_reason: model.action_reason.unwrap_or_default(),
            audit_date,
            server_id: model.server_id.unwrap_or_default(),
        })
    }
}
