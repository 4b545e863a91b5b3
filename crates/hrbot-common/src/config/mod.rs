//! Configuration structs

mod app_config;

pub use app_config::{
    AccessConfig, AppConfig, AppSettings, ConfigError, DatabaseSettings, DiscordSettings,
    Environment, ServerConfig,
};
