//! Domain entities - core business objects

mod audit;
mod blacklist;

pub use audit::{AuditEntry, NewAuditEntry};
pub use blacklist::{BlacklistEntry, ListType, NewBlacklistEntry};
