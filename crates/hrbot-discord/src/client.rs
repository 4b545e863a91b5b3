use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use hrbot_core::Snowflake;

use crate::commands::CommandDefinition;
use crate::config::DiscordConfig;
use crate::error::DiscordError;
use crate::types::{CreateMessage, Guild, Message};

/// Minimal Discord REST client authenticated as the bot.
#[derive(Debug, Clone)]
pub struct DiscordClient {
    config: DiscordConfig,
    http: Client,
}

impl DiscordClient {
    /// Create a client with its own connection pool.
    pub fn new(config: DiscordConfig) -> Result<Self, DiscordError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("hrbot (", env!("CARGO_PKG_VERSION"), ")"))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &DiscordConfig {
        &self.config
    }

    /// `POST /channels/{channel_id}/messages`
    #[instrument(skip_all, fields(channel_id = %channel_id))]
    pub async fn create_message(
        &self,
        channel_id: Snowflake,
        message: &CreateMessage,
    ) -> Result<Message, DiscordError> {
        let url = self.config.url(&format!("/channels/{channel_id}/messages"));
        self.send(self.http.post(url).json(message)).await
    }

    /// `GET /guilds/{guild_id}`
    #[instrument(skip_all, fields(guild_id = %guild_id))]
    pub async fn get_guild(&self, guild_id: Snowflake) -> Result<Guild, DiscordError> {
        let url = self.config.url(&format!("/guilds/{guild_id}"));
        self.send(self.http.get(url)).await
    }

    /// `PUT /applications/{application_id}/commands`, replacing the global set.
    /// Returns the number of commands Discord reports back.
    #[instrument(skip_all, fields(count = commands.len()))]
    pub async fn register_commands(
        &self,
        commands: &[CommandDefinition],
    ) -> Result<usize, DiscordError> {
        let url = self.config.url(&format!(
            "/applications/{}/commands",
            self.config.application_id
        ));
        let registered: Vec<serde_json::Value> =
            self.send(self.http.put(url).json(commands)).await?;
        Ok(registered.len())
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, DiscordError> {
        let response = request
            .header("Authorization", format!("Bot {}", self.config.token))
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Discord API rate limit hit");
            return Err(DiscordError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DiscordError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Discord API response");
        serde_json::from_slice(&body).map_err(|e| DiscordError::InvalidPayload(e.to_string()))
    }
}
