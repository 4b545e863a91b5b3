//! Blacklist service
//!
//! Adds, removes and looks up blacklist entries, and carries out the two
//! follow-up actions offered on a cross-reference alert.

use hrbot_core::entities::{BlacklistEntry, ListType, NewBlacklistEntry};
use hrbot_core::BlacklistQuery;
use tracing::{info, instrument};

use crate::dto::AddBlacklistRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Blacklist service
pub struct BlacklistService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlacklistService<'a> {
    /// Create a new BlacklistService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add an entry
    ///
    /// Blank tag, document number and expiry are stored as absent. Duplicates
    /// are allowed.
    #[instrument(skip(self, request))]
    pub async fn add(
        &self,
        request: AddBlacklistRequest,
        added_by: &str,
    ) -> ServiceResult<BlacklistEntry> {
        let list_type: ListType = request.list_type.parse()?;

        let new_entry = NewBlacklistEntry::new(
            request.tag.as_deref(),
            request.document_number.as_deref(),
            list_type,
            request.reason,
            request.expiry_date.as_deref(),
            added_by,
        );

        let entry = self.ctx.blacklist_repo().create(&new_entry).await?;

        info!(
            entry_id = entry.id,
            list_type = %entry.list_type,
            added_by = %entry.added_by,
            "Blacklist entry added"
        );

        Ok(entry)
    }

    /// Remove every entry matching either key
    #[instrument(skip(self))]
    pub async fn remove(&self, query: &BlacklistQuery) -> ServiceResult<u64> {
        let removed = self.ctx.blacklist_repo().delete(query).await?;

        info!(removed, "Blacklist entries removed");

        Ok(removed)
    }

    /// Direct lookup; tag wins over document number when both are given
    #[instrument(skip(self))]
    pub async fn lookup(&self, query: &BlacklistQuery) -> ServiceResult<Option<BlacklistEntry>> {
        Ok(self.ctx.blacklist_repo().find(query).await?)
    }

    /// Most recent entries, newest first
    #[instrument(skip(self))]
    pub async fn list_recent(&self, limit: i64) -> ServiceResult<Vec<BlacklistEntry>> {
        Ok(self.ctx.blacklist_repo().list(limit).await?)
    }

    /// Reviewer chose to proceed despite a match; nothing changes
    #[instrument(skip(self))]
    pub async fn acknowledge(&self, document_number: &str) -> ServiceResult<()> {
        info!(document_number, "Cross-reference acknowledged");
        Ok(())
    }

    /// Reviewer chose to clear the match: removes all entries with this document number
    #[instrument(skip(self))]
    pub async fn remove_by_document_number(&self, document_number: &str) -> ServiceResult<u64> {
        let query = BlacklistQuery::by_document_number(document_number);
        let removed = self.ctx.blacklist_repo().delete(&query).await?;

        info!(document_number, removed, "Cross-referenced entries removed");

        Ok(removed)
    }
}
