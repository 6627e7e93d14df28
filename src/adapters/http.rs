use crate::domain::ports::Transport;
use crate::utils::error::Result;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// `reqwest`-backed transport. Non-2xx answers surface as transport errors.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout_ms: Option<u64>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Uses a caller-configured client, e.g. one with a proxy or custom TLS roots.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, url: &str, body: String, content_type: &str) -> Result<String> {
        tracing::debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;

        tracing::debug!("Printer HTTP status: {}", response.status());

        let text = response.error_for_status()?.text().await?;
        Ok(text)
    }
}
