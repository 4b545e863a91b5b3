//! Workflow services
//!
//! Each service borrows the [`ServiceContext`] for the duration of one
//! command and orchestrates the repository and notifier calls it needs.

pub mod audit;
pub mod blacklist;
pub mod context;
pub mod error;
pub mod permission;

pub use audit::{AuditOutcome, AuditService};
pub use blacklist::BlacklistService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use permission::AccessPolicy;

#[cfg(test)]
pub(crate) mod testing;
