//! # hrbot-api
//!
//! Discord HTTP interactions endpoint and health checks built with Axum.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_discord_client, run};
pub use state::AppState;

#[cfg(test)]
mod testing;
