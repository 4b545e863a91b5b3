//! # hrbot-discord
//!
//! Discord platform client for the HR bot.
//!
//! - [`interaction`]: inbound interaction payloads and the responses to them
//! - [`types`]: outbound message, embed and button objects
//! - [`signature`]: ed25519 verification of interaction requests
//! - [`client`]: REST client (messages, guilds, command registration)
//! - [`notifier`]: [`CrossReferenceNotifier`](hrbot_core::CrossReferenceNotifier)
//!   implementation posting blacklist-match alerts
//!
//! # Quick start
//!
//! ```rust,no_run
//! use hrbot_core::Snowflake;
//! use hrbot_discord::{DiscordClient, DiscordConfig, DiscordNotifier};
//!
//! # fn main() -> Result<(), hrbot_discord::DiscordError> {
//! let config = DiscordConfig::new("bot-token", Snowflake::new(1))
//!     .with_notification_channel(Snowflake::new(2));
//! let client = DiscordClient::new(config)?;
//! let notifier = DiscordNotifier::new(client);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod commands;
pub mod components;
pub mod config;
pub mod error;
pub mod interaction;
pub mod notifier;
pub mod signature;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::DiscordClient;
pub use components::ComponentAction;
pub use config::DiscordConfig;
pub use error::DiscordError;
pub use interaction::{
    Interaction, InteractionCallbackData, InteractionResponse, InteractionType, EPHEMERAL,
};
pub use notifier::DiscordNotifier;
pub use signature::{SignatureError, SignatureVerifier};
pub use types::{ActionRow, Button, ButtonStyle, CreateMessage, DiscordEmbed, DiscordEmbedField};
