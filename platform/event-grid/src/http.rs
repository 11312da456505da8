//! HTTP implementation of the `EventSink` trait.

use crate::{CredentialProvider, EventSink, GridError, GridEvent, GridResult};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Publishes envelopes to the topic endpoint over HTTPS.
///
/// The credential is resolved per publish call, so token rotation in the
/// underlying provider is picked up without rebuilding the sink.
#[derive(Clone)]
pub struct HttpSink {
    http_client: Client,
    credential: Arc<dyn CredentialProvider>,
}

impl HttpSink {
    /// Create a new sink with the given credential provider
    pub fn new(credential: Arc<dyn CredentialProvider>) -> GridResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| GridError::Http(e.to_string()))?;

        Ok(HttpSink {
            http_client,
            credential,
        })
    }
}

#[async_trait]
impl EventSink for HttpSink {
    async fn send(&self, endpoint: &str, event: &GridEvent) -> GridResult<()> {
        let token = self.credential.bearer_token().await?;

        // The topic accepts a batch; a single publish is a one-element array.
        let response = self
            .http_client
            .post(endpoint)
            .header("Authorization", format!("Bearer {token}"))
            .json(&[event])
            .send()
            .await
            .map_err(|e| GridError::Http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(event_id = %event.id, %endpoint, "envelope accepted by topic");
            Ok(())
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error response".to_string());

            Err(GridError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticCredential;

    #[test]
    fn test_sink_construction() {
        let sink = HttpSink::new(Arc::new(StaticCredential::new("token")));
        assert!(sink.is_ok());
    }
}
