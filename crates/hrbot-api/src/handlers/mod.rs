//! Route handlers
//!
//! Interaction handlers for slash commands and alert buttons, plus the
//! health checks.

pub mod commands;
pub mod components;
pub mod health;
pub mod interactions;
mod replies;
