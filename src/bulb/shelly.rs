// shelly.rs
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::ColorSink;
use crate::error::TransportError;

/// Client for a Shelly bulb's local HTTP control API.
///
/// Colors are set with a single bodiless GET against `/light/0`; the bulb's
/// response body carries nothing we need, only error/no-error matters.
pub struct ShellyBulb {
    client: reqwest::Client,
    host: String,
}

impl ShellyBulb {
    pub fn new(host: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::new(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            host: host.into(),
        })
    }
}

#[async_trait]
impl ColorSink for ShellyBulb {
    async fn set_color(&self, red: u8, green: u8, blue: u8) -> Result<(), TransportError> {
        let url = format!(
            "http://{}/light/0?turn=on&red={}&green={}&blue={}",
            self.host, red, green, blue
        );
        debug!(%url, "sending color to bulb");

        // One attempt, no retries. Any transport failure or non-success
        // status collapses into a single error kind.
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        response
            .error_for_status()
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(())
    }
}
