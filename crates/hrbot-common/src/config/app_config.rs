//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use hrbot_core::Snowflake;
use std::env;
use std::fmt;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseSettings,
    pub discord: DiscordSettings,
    pub access: AccessConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Parse an `APP_ENV` value; unknown values yield `None`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }

    /// Read `APP_ENV` from the process environment (after loading `.env`)
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        env::var("APP_ENV")
            .ok()
            .and_then(|s| Self::parse(&s))
            .unwrap_or_default()
    }
}

/// HTTP listener configuration (interactions endpoint and health checks)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// SQLite store location
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
}

/// Discord application credentials and REST target
#[derive(Clone)]
pub struct DiscordSettings {
    pub token: String,
    pub application_id: Snowflake,
    /// Hex-encoded ed25519 public key of the application
    pub public_key: String,
    pub api_base: String,
    /// Channel for cross-reference warnings; `None` disables them
    pub notification_channel_id: Option<Snowflake>,
    /// Overwrite the global slash commands on startup
    pub register_commands: bool,
}

impl fmt::Debug for DiscordSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordSettings")
            .field("token", &"[REDACTED]")
            .field("application_id", &self.application_id)
            .field("public_key", &self.public_key)
            .field("api_base", &self.api_base)
            .field("notification_channel_id", &self.notification_channel_id)
            .field("register_commands", &self.register_commands)
            .finish()
    }
}

/// Channel and role identifiers gating the commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessConfig {
    /// The only channel `/audit` may be used in
    pub audit_channel_id: Snowflake,
    /// Role required for `/audit`
    pub audit_role_id: Snowflake,
    /// Role required for every blacklist command
    pub blacklist_role_id: Snowflake,
}

// Default value functions
fn default_app_name() -> String {
    "hrbot".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "sqlite://hrbot.db".to_string()
}

fn default_api_base() -> String {
    "https://discord.com/api/v10".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| var(key).ok_or(ConfigError::MissingVar(key));
        let snowflake = |key: &'static str, raw: String| {
            Snowflake::parse(&raw).map_err(|_| ConfigError::InvalidValue(key, raw))
        };

        let notification_channel_id = match var("NOTIFICATION_CHANNEL_ID") {
            Some(raw) => Some(snowflake("NOTIFICATION_CHANNEL_ID", raw)?),
            None => None,
        };

        let register_commands = match var("REGISTER_COMMANDS") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("REGISTER_COMMANDS", raw))?,
            None => true,
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT", raw))?,
            None => default_port(),
        };

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port,
            },
            database: DatabaseSettings {
                url: var("DATABASE_URL").unwrap_or_else(default_database_url),
            },
            discord: DiscordSettings {
                token: required("DISCORD_TOKEN")?,
                application_id: snowflake(
                    "DISCORD_APPLICATION_ID",
                    required("DISCORD_APPLICATION_ID")?,
                )?,
                public_key: required("DISCORD_PUBLIC_KEY")?,
                api_base: var("DISCORD_API_BASE")
                    .map(|s| s.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_api_base),
                notification_channel_id,
                register_commands,
            },
            access: AccessConfig {
                audit_channel_id: snowflake("AUDIT_CHANNEL_ID", required("AUDIT_CHANNEL_ID")?)?,
                audit_role_id: snowflake("AUDIT_ROLE_ID", required("AUDIT_ROLE_ID")?)?,
                blacklist_role_id: snowflake(
                    "BLACKLIST_ROLE_ID",
                    required("BLACKLIST_ROLE_ID")?,
                )?,
            },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
