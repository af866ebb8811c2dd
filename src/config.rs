//! Runtime configuration read from the environment (and `.env` via `dotenv`).

use std::env;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_COMMAND_PREFIX: &str = "!";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Settings for the YouTube Data API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeConfig {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub discord_token: String,
    pub command_prefix: String,
    pub youtube: YoutubeConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let request_timeout = match get("YOUTUBE_REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "YOUTUBE_REQUEST_TIMEOUT_SECS",
                        value: raw,
                    });
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Ok(Self {
            discord_token: require("DISCORD_TOKEN")?,
            command_prefix: get("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            youtube: YoutubeConfig {
                api_key: require("YOUTUBE_API_KEY")?,
                base_url: get("YOUTUBE_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
                request_timeout,
            },
        })
    }
}
