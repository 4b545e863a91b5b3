//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in hrbot-core.

mod audit;
mod blacklist;
mod error;

pub use audit::SqliteAuditRepository;
pub use blacklist::SqliteBlacklistRepository;
