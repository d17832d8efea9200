use crate::{BoxStream, Result};
use bytes::Bytes;
use futures::TryStreamExt;
use std::time::Duration;
use tracing::debug;

/// HTTP transport for the conversation backend.
///
/// Injects the bearer token on every outbound call. Read timeout is this
/// layer's responsibility; it surfaces to the decoder as a transport fault.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, access_token: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            // Mirrors the backend's short-lived connection reuse window.
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Some(Duration::from_secs(1)))
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a streaming POST and return the raw chunked response body.
    ///
    /// Dropping the returned stream drops the underlying response, releasing
    /// the connection on every exit path, early abandonment included.
    pub async fn post_stream(
        &self,
        path: &str,
        request_body: &serde_json::Value,
    ) -> Result<BoxStream<'static, Bytes>> {
        let url = self.url(path);
        debug!(%url, "issuing streaming POST");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .header("accept", "text/event-stream")
            .json(request_body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        let byte_stream = resp
            .bytes_stream()
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)));
        Ok(Box::pin(byte_stream))
    }

    /// Issue a non-streaming POST and read the entire body as text.
    pub async fn post_text(&self, path: &str, request_body: &serde_json::Value) -> Result<String> {
        let url = self.url(path);
        debug!(%url, "issuing POST");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(request_body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        resp.text()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))
    }

    /// Issue a GET with optional query parameters and parse the body as JSON.
    pub async fn get_json(
        &self,
        path: &str,
        query_params: &[(&str, String)],
    ) -> Result<serde_json::Value> {
        let url = self.url(path);
        debug!(%url, "issuing GET");

        let mut request = self.client.get(&url).bearer_auth(&self.access_token);
        if !query_params.is_empty() {
            request = request.query(query_params);
        }

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))?;

        response
            .json()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// The bare fault message, without the variant's display prefix.
    pub fn message(&self) -> String {
        match self {
            TransportError::Http(e) => e.to_string(),
            TransportError::Other(s) => s.clone(),
        }
    }
}
