//! Access policy
//!
//! Gates the slash commands on the invoking channel and the invoker's roles.
//! Checks are pure; a denial is returned before any store access.

use hrbot_common::AccessConfig;
use hrbot_core::Snowflake;
use tracing::{debug, instrument};

use super::error::{ServiceError, ServiceResult};

/// Channel and role gate for the commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    audit_channel_id: Snowflake,
    audit_role_id: Snowflake,
    blacklist_role_id: Snowflake,
}

impl AccessPolicy {
    pub fn new(access: AccessConfig) -> Self {
        Self {
            audit_channel_id: access.audit_channel_id,
            audit_role_id: access.audit_role_id,
            blacklist_role_id: access.blacklist_role_id,
        }
    }

    /// Whether the invoker may use the blacklist commands and buttons
    pub fn can_manage_blacklist(&self, roles: &[Snowflake]) -> bool {
        roles.contains(&self.blacklist_role_id)
    }

    /// Check the `/audit` gate and return an error if denied
    ///
    /// The channel is checked before the role.
    #[instrument(skip(self, roles))]
    pub fn require_audit(
        &self,
        channel_id: Option<Snowflake>,
        roles: &[Snowflake],
    ) -> ServiceResult<()> {
        if channel_id != Some(self.audit_channel_id) {
            debug!("Audit attempted outside the audit channel");
            return Err(ServiceError::wrong_channel(self.audit_channel_id));
        }
        if !roles.contains(&self.audit_role_id) {
            debug!("Audit attempted without the audit role");
            return Err(ServiceError::permission_denied("audit"));
        }
        Ok(())
    }

    /// Check the blacklist gate and return an error if denied
    #[instrument(skip(self, roles))]
    pub fn require_blacklist(&self, roles: &[Snowflake]) -> ServiceResult<()> {
        if !self.can_manage_blacklist(roles) {
            debug!("Blacklist command attempted without the blacklist role");
            return Err(ServiceError::permission_denied("blacklist"));
        }
        Ok(())
    }
}

impl From<AccessConfig> for AccessPolicy {
    fn from(access: AccessConfig) -> Self {
        Self::new(access)
    }
}
