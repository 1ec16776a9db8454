//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::player::Locale;
use crate::sources::DEFAULT_SOURCE_FIELD;

/// How resolved sources are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of reports.
    #[default]
    Json,
    /// One human-readable line per source.
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            other => Err(format!("Unknown output format '{other}'")),
        }
    }
}

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Language of captions and diagnostics
    pub locale: Locale,
    /// Output format of the CLI
    pub format: OutputFormat,
    /// Record field holding the media source in JSON source lists
    pub source_field: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            locale: Locale::default(),
            format: OutputFormat::default(),
            source_field: DEFAULT_SOURCE_FIELD.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(locale) = lookup("SONGLINK_LOCALE") {
            config.locale = locale
                .parse()
                .map_err(|e: String| Error::config(e, "Set SONGLINK_LOCALE to 'ru' or 'en'"))?;
        }

        if let Some(format) = lookup("SONGLINK_FORMAT") {
            config.format = format
                .parse()
                .map_err(|e: String| Error::config(e, "Set SONGLINK_FORMAT to 'json' or 'text'"))?;
        }

        if let Some(field) = lookup("SONGLINK_FIELD").filter(|f| !f.trim().is_empty()) {
            config.source_field = field.trim().to_string();
        }

        Ok(config)
    }
}
