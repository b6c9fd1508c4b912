use crate::client::core::RecipeClient;
use crate::config::{parse_api_url, FinderConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`RecipeClient`].
pub struct RecipeClientBuilder {
    api_url: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl RecipeClientBuilder {
    pub fn new() -> Self {
        Self {
            api_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: &FinderConfig) -> Self {
        Self::new()
            .api_url(config.api_url.clone())
            .timeout(config.timeout)
    }

    /// Full URL of the endpoint, e.g. `http://localhost:5000/get_recipes`.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Abort the request if no complete reply arrives within `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    pub fn build(self) -> Result<RecipeClient> {
        let api_url = self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = parse_api_url(&api_url)?.to_string();
        if self.timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "timeout must be greater than zero",
                ErrorContext::new().with_field_path("timeout"),
            ));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("recipe-finder/{}", env!("CARGO_PKG_VERSION")));
        let transport = Arc::new(HttpTransport::new(self.timeout, Some(&user_agent))?);

        Ok(RecipeClient { transport, api_url })
    }
}

impl Default for RecipeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
