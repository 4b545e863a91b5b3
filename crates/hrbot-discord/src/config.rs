use hrbot_core::Snowflake;

/// Default REST base for API v10.
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Configuration for the Discord REST client.
#[derive(Clone)]
pub struct DiscordConfig {
    /// Bot token, sent as `Authorization: Bot <token>`.
    pub token: String,

    /// Application id, used for command registration.
    pub application_id: Snowflake,

    /// REST base URL without a trailing slash.
    pub api_base: String,

    /// Channel receiving cross-reference alerts. `None` disables alerts.
    pub notification_channel_id: Option<Snowflake>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"[REDACTED]")
            .field("application_id", &self.application_id)
            .field("api_base", &self.api_base)
            .field("notification_channel_id", &self.notification_channel_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl DiscordConfig {
    /// Create a new configuration with the given bot token and application id.
    pub fn new(token: impl Into<String>, application_id: Snowflake) -> Self {
        Self {
            token: token.into(),
            application_id,
            api_base: DEFAULT_API_BASE.to_string(),
            notification_channel_id: None,
            timeout_secs: 30,
        }
    }

    /// Point the client at another REST base (tests, proxies).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the channel that receives cross-reference alerts.
    #[must_use]
    pub fn with_notification_channel(mut self, channel_id: Snowflake) -> Self {
        self.notification_channel_id = Some(channel_id);
        self
    }

    /// Set the channel from an optional value.
    #[must_use]
    pub fn with_optional_notification_channel(mut self, channel_id: Option<Snowflake>) -> Self {
        self.notification_channel_id = channel_id;
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Build an absolute URL for an API path such as `/channels/1/messages`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}
