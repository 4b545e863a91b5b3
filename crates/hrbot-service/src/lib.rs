//! # hrbot-service
//!
//! Application layer containing the blacklist and audit workflows, the access
//! policy gating the commands, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{AddBlacklistRequest, HealthChecks, HealthResponse, ReadinessResponse, SubmitAuditRequest};
pub use services::{
    AccessPolicy, AuditOutcome, AuditService, BlacklistService, ServiceContext, ServiceError,
    ServiceResult,
};
