use config::{Config, Environment};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_STEM, DEFAULT_LOG_LEVEL, ENV_PREFIX};
use crate::error::CoreResult;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Output path used when none is given on the command line.
    #[serde(default)]
    pub output_path: Option<String>,
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_level: String,
}

impl Settings {
    /// ## Summary
    /// Loads settings from the optional `icaljson.toml` file and `ICALJSON_*`
    /// environment variables. Environment variables take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Self::from_environment(environment())
    }

    fn from_environment(env: Environment) -> CoreResult<Self> {
        let settings = Config::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(config::File::with_name(CONFIG_FILE_STEM).required(false))
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?;

        tracing::debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// ## Summary
    /// Returns the configured output path, ignoring blank values.
    #[must_use]
    pub fn output_path(&self) -> Option<&str> {
        self.output_path
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .ignore_empty(true)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
