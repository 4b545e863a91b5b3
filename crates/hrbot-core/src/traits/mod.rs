//! Ports - interfaces the domain needs from infrastructure

mod notifier;
mod repositories;

pub use notifier::CrossReferenceNotifier;
pub use repositories::{AuditRepository, BlacklistRepository, RepoResult};
