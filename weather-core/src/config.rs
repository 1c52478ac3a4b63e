use anyhow::{Context, Result, bail};
use std::env;

/// Name of the environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Credentials for the OpenWeather API, read once at startup and passed
/// by value into the client. There is no other configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Build a config from an explicit key, rejecting empty values.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        if api_key.trim().is_empty() {
            bail!(
                "{API_KEY_VAR} is empty.\n\
                 Hint: put `{API_KEY_VAR}=<your key>` in the .env file."
            );
        }

        Ok(Self { api_key })
    }

    /// Load credentials from the local `.env` file.
    ///
    /// The file is required: running without one is a configuration error,
    /// reported before any network activity.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().context("Failed to load .env file")?;

        let api_key = env::var(API_KEY_VAR)
            .with_context(|| format!("{API_KEY_VAR} is not set in the .env file"))?;

        Self::new(api_key)
    }
}
