//! Finder configuration.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! environment variables. The binary applies its own flags last.
//!
//! Environment:
//! - `RECIPE_API_URL` — recommendation endpoint (default `http://localhost:5000/get_recipes`)
//! - `RECIPE_TIMEOUT_SECS` — request timeout in seconds (default 25)
//! - `RECIPE_SKELETON_CARDS` — loading placeholders to show (default 3)

use crate::render::DEFAULT_SKELETON_CARDS;
use crate::{Error, ErrorContext, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/get_recipes";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(25);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub skeleton_cards: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            skeleton_cards: DEFAULT_SKELETON_CARDS,
        }
    }
}

/// On-disk shape. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_url: Option<String>,
    timeout_ms: Option<u64>,
    skeleton_cards: Option<usize>,
}

impl FinderConfig {
    /// Defaults overridden by a YAML file, then by the process environment.
    ///
    /// The result is not validated; apply any remaining overrides and then
    /// call [`FinderConfig::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(p) => Self::default().with_yaml_file(p)?,
            None => Self::default(),
        };
        Ok(base.with_env_lookup(|key| std::env::var(key).ok()))
    }

    pub fn with_yaml_file(self, path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        self.with_yaml_str(&raw).map_err(|e| match e {
            Error::Configuration { message, context } => Error::Configuration {
                message,
                context: context.with_source(path.display().to_string()),
            },
            other => other,
        })
    }

    pub fn with_yaml_str(mut self, raw: &str) -> Result<Self> {
        let file: ConfigFile = if raw.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(raw).map_err(|e| {
                Error::configuration_with_context(
                    "invalid config file",
                    ErrorContext::new().with_details(e.to_string()),
                )
            })?
        };

        if let Some(url) = file.api_url {
            self.api_url = url;
        }
        if let Some(ms) = file.timeout_ms {
            self.timeout = Duration::from_millis(ms);
        }
        if let Some(n) = file.skeleton_cards {
            self.skeleton_cards = n;
        }
        Ok(self)
    }

    /// Apply overrides from an environment-like lookup.
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("RECIPE_API_URL").filter(|s| !s.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(raw) = lookup("RECIPE_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.timeout = Duration::from_secs(secs),
                Err(_) => warn!(value = %raw, "ignoring unparsable RECIPE_TIMEOUT_SECS"),
            }
        }
        if let Some(raw) = lookup("RECIPE_SKELETON_CARDS") {
            match raw.trim().parse::<usize>() {
                Ok(n) => self.skeleton_cards = n,
                Err(_) => warn!(value = %raw, "ignoring unparsable RECIPE_SKELETON_CARDS"),
            }
        }
        self
    }

    /// Apply explicit overrides, e.g. command-line flags. These win over every other layer.
    pub fn with_overrides(mut self, api_url: Option<String>, timeout: Option<Duration>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(timeout) = timeout {
            self.timeout = timeout;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        parse_api_url(&self.api_url)?;
        if self.timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "timeout must be greater than zero",
                ErrorContext::new().with_field_path("timeout"),
            ));
        }
        Ok(())
    }
}

/// Parse and check an endpoint URL. Only `http` and `https` are accepted.
pub(crate) fn parse_api_url(raw: &str) -> Result<url::Url> {
    let parsed = url::Url::parse(raw).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid api url '{}'", raw),
            ErrorContext::new()
                .with_field_path("api_url")
                .with_details(e.to_string()),
        )
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::configuration_with_context(
            format!("unsupported api url scheme '{}'", other),
            ErrorContext::new().with_field_path("api_url"),
        )),
    }
}
