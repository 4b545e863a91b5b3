use hrbot_core::DomainError;
use thiserror::Error;

/// Errors raised by the Discord REST client.
#[derive(Debug, Error)]
pub enum DiscordError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The Discord API returned a non-success status.
    #[error("Discord API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// A request or response body could not be (de)serialized.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// The client received an HTTP 429 (Too Many Requests) response.
    #[error("rate limited by Discord")]
    RateLimited,
}

impl DiscordError {
    /// The target channel/guild is gone or the bot cannot see it.
    pub fn is_target_unavailable(&self) -> bool {
        matches!(self, Self::Api { status: 403 | 404, .. })
    }
}

impl From<DiscordError> for DomainError {
    fn from(err: DiscordError) -> Self {
        if err.is_target_unavailable() {
            DomainError::NotificationTargetUnavailable(err.to_string())
        } else {
            DomainError::NotificationFailed(err.to_string())
        }
    }
}
