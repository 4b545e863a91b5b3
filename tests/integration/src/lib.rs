//! Integration test utilities for the HR bot
//!
//! This crate provides helpers for running end-to-end tests against
//! the interactions endpoint and the health checks.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
