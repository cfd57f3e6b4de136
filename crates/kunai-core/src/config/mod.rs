use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

/// Smallest fold width that still leaves room for a property name.
pub const MIN_LINE_OCTETS: usize = 8;
/// RFC 5322-style hard ceiling; RFC 5545 recommends 75.
pub const MAX_LINE_OCTETS: usize = 998;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub codec: CodecConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Fold content lines when serializing.
    pub fold_lines: bool,
    /// Octet width used when folding (RFC 5545 §3.1 recommends 75).
    pub max_line_octets: usize,
}

impl CodecConfig {
    /// ## Summary
    /// Checks that the configured fold width is usable.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if `max_line_octets` is
    /// outside `MIN_LINE_OCTETS..=MAX_LINE_OCTETS`.
    pub fn validate(&self) -> CoreResult<()> {
        if (MIN_LINE_OCTETS..=MAX_LINE_OCTETS).contains(&self.max_line_octets) {
            Ok(())
        } else {
            Err(CoreError::InvalidConfiguration(format!(
                "codec.max_line_octets must be between {MIN_LINE_OCTETS} and {MAX_LINE_OCTETS}, got {}",
                self.max_line_octets
            )))
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            fold_lines: true,
            max_line_octets: 75,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional `kunai.toml` and
    /// `KUNAI_`-prefixed environment variables (`KUNAI_CODEC__FOLD_LINES=false`).
    /// Environment variables take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the codec section fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("codec.fold_lines", true)?
            .set_default("codec.max_line_octets", 75)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.codec.validate()?;
        tracing::debug!(?settings, "Configuration loaded");

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests;
