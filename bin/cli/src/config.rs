//! Command-line configuration.
//!
//! Loaded via the `config` crate from `CREATOR_BOOST__*` environment
//! variables, e.g. `CREATOR_BOOST__API_KEY` and
//! `CREATOR_BOOST__GEMINI__TEXT_MODEL`.

use crate::error::CliError;
use creator_boost_ai::GeminiConfig;
use creator_boost_core::Result;
use serde::Deserialize;

const ENV_PREFIX: &str = "CREATOR_BOOST";

/// Configuration for the `creator-boost` binary.
#[derive(Debug, Deserialize)]
pub struct CliConfig {
    /// Gemini API key.
    pub api_key: String,

    /// Gemini endpoint and model settings.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl CliConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or a value is invalid.
    pub fn from_env() -> Result<Self, CliError> {
        Self::load(environment())
    }

    fn load(source: config::Environment) -> Result<Self, CliError> {
        config::Config::builder()
            .add_source(source)
            .build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| {
                CliError::Config {
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
