//! Data transfer objects
//!
//! This module provides:
//! - Request DTOs built from slash command options
//! - Response DTOs for the health endpoints

pub mod requests;
pub mod responses;

pub use requests::{AddBlacklistRequest, SubmitAuditRequest};
pub use responses::{HealthChecks, HealthResponse, ReadinessResponse};
