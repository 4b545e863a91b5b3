//! Database models - SQLx-compatible structs for the SQLite tables

mod audit;
mod blacklist;

pub use audit::AuditModel;
pub use blacklist::BlacklistModel;
