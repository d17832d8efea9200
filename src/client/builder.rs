use crate::client::core::ConversationClient;
use crate::stream::EventStreamDecoder;
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://chatgpt.duti.tech";
const DEFAULT_MODEL: &str = "text-davinci-002-render-sha";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small: token, base URL, model, timeout.
pub struct ConversationClientBuilder {
    access_token: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
}

impl ConversationClientBuilder {
    pub fn new() -> Self {
        Self {
            access_token: None,
            base_url: None,
            model: None,
            timeout: None,
        }
    }

    /// Set the bearer access token.
    ///
    /// Falls back to the `CHATGPT_ACCESS_TOKEN` environment variable when
    /// not set here.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Override the backend base URL.
    ///
    /// Primarily for testing with mock servers.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the backend model slug used for conversation requests.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the request read timeout. Default is 10 seconds; also
    /// overridable via `CHATGPT_TIMEOUT_SECS`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ConversationClient> {
        let access_token = self
            .access_token
            .or_else(|| std::env::var("CHATGPT_ACCESS_TOKEN").ok())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                crate::Error::configuration(
                    "access token is required (builder or CHATGPT_ACCESS_TOKEN)",
                )
            })?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|e| {
            crate::Error::configuration(format!("invalid base URL {}: {}", base_url, e))
        })?;

        let timeout = self
            .timeout
            .or_else(|| {
                std::env::var("CHATGPT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs)
            })
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let transport = Arc::new(HttpTransport::new(&base_url, &access_token, timeout)?);

        Ok(ConversationClient {
            transport,
            decoder: Arc::new(EventStreamDecoder::new()),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

impl Default for ConversationClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        let err = ConversationClientBuilder::new()
            .access_token("tok")
            .base_url("not a url")
            .build()
            .unwrap_err();

        assert!(matches!(err, crate::Error::Configuration { .. }));
    }

    #[test]
    fn builds_with_defaults() {
        let client = ConversationClientBuilder::new()
            .access_token("tok")
            .build()
            .unwrap();

        assert_eq!(client.model, DEFAULT_MODEL);
    }
}
