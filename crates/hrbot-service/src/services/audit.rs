//! Audit service
//!
//! Records personnel actions and cross-references the subject's document
//! number against the blacklist.

use hrbot_core::entities::{AuditEntry, NewAuditEntry};
use hrbot_core::value_objects::local_now;
use hrbot_core::{BlacklistQuery, CrossReferenceSignal};
use serde::Serialize;
use tracing::{info, instrument};

use crate::dto::SubmitAuditRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Result of a submitted audit
#[derive(Debug, Clone, Serialize)]
pub struct AuditOutcome {
    pub audit: AuditEntry,
    /// Present when the audited document number is blacklisted
    pub cross_reference: Option<CrossReferenceSignal>,
}

impl AuditOutcome {
    pub fn is_flagged(&self) -> bool {
        self.cross_reference.is_some()
    }
}

/// Audit service
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    /// Create a new AuditService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Persist an audit, then cross-reference the passport
    ///
    /// The audit is stored before the blacklist is consulted, so a match never
    /// blocks it. Only the passport is checked, exactly as submitted. Reviewers
    /// are notified on a background task, so the outcome is returned without
    /// waiting on the notification target.
    #[instrument(skip(self, request))]
    pub async fn submit(
        &self,
        request: SubmitAuditRequest,
        requester_tag: &str,
        server_id: &str,
    ) -> ServiceResult<AuditOutcome> {
        let new_audit = NewAuditEntry {
            requester_tag: requester_tag.to_string(),
            id_number: request.id_number,
            employee_name: request.employee_name,
            employee_passport: request.employee_passport,
            action_type: request.action_type,
            action_reason: request.action_reason,
            audit_date: local_now(),
            server_id: server_id.to_string(),
        };

        let audit = self.ctx.audit_repo().create(&new_audit).await?;

        info!(
            audit_id = audit.id,
            requester = %audit.requester_tag,
            action_type = %audit.action_type,
            "Audit recorded"
        );

        let cross_reference = self.cross_reference(&audit).await?;

        Ok(AuditOutcome {
            audit,
            cross_reference,
        })
    }

    async fn cross_reference(&self, audit: &AuditEntry) -> ServiceResult<Option<CrossReferenceSignal>> {
        if audit.employee_passport.is_empty() {
            return Ok(None);
        }

        let query = BlacklistQuery::by_document_number(audit.employee_passport.as_str());
        let Some(entry) = self.ctx.blacklist_repo().find(&query).await? else {
            return Ok(None);
        };

        let signal = CrossReferenceSignal::new(audit, &entry);

        info!(
            audit_id = audit.id,
            entry_id = entry.id,
            list_type = %entry.list_type,
            "Audited subject is blacklisted"
        );

        self.ctx.dispatch_notification(signal.clone());

        Ok(Some(signal))
    }

    /// Get an audit by id
    #[instrument(skip(self))]
    pub async fn find_audit(&self, id: i64) -> ServiceResult<Option<AuditEntry>> {
        Ok(self.ctx.audit_repo().find_by_id(id).await?)
    }

    /// All audits filed for a passport, oldest first
    #[instrument(skip(self))]
    pub async fn history(&self, passport: &str) -> ServiceResult<Vec<AuditEntry>> {
        Ok(self.ctx.audit_repo().find_by_passport(passport).await?)
    }
}
