use crate::{Error, Result};
use reqwest::Proxy;
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

/// Status line and raw body of a finished exchange.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: Option<&str>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua.to_string());
        }

        if let Some(proxy) = proxy_from_env(env::var("RECIPE_PROXY_URL").ok()) {
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST `body` as JSON and collect the reply.
    ///
    /// The whole exchange (connect, send, body read) is aborted once the
    /// timeout elapses. A body that cannot be read after a status line has
    /// arrived is treated as empty.
    pub async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<HttpReply> {
        debug!(url, timeout_ms = self.timeout.as_millis() as u64, "POST");
        let exchange = async {
            let response = self
                .client
                .post(url)
                .header("Content-Type", "application/json")
                .json(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = match response.text().await {
                Ok(text) => text,
                Err(e) if e.is_timeout() => return Err(e),
                Err(_) => String::new(),
            };
            Ok::<_, reqwest::Error>(HttpReply { status, body })
        };

        match tokio::time::timeout(self.timeout, exchange).await {
            Err(_) => Err(self.timed_out()),
            Ok(Err(e)) if e.is_timeout() => Err(self.timed_out()),
            Ok(Err(e)) => Err(Error::Transport(TransportError::Http(e))),
            Ok(Ok(reply)) => Ok(reply),
        }
    }

    fn timed_out(&self) -> Error {
        Error::Timeout {
            after_ms: self.timeout.as_millis() as u64,
        }
    }
}

/// Proxy for every scheme from `RECIPE_PROXY_URL`. Bad values are logged and skipped.
fn proxy_from_env(raw: Option<String>) -> Option<Proxy> {
    let raw = raw.filter(|s| !s.trim().is_empty())?;
    match Proxy::all(raw.trim()) {
        Ok(proxy) => Some(proxy),
        Err(e) => {
            warn!(value = %raw, error = %e, "ignoring unusable RECIPE_PROXY_URL");
            None
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
