use fcm_core::contracts::{AccessToken, ActionPayload, SendResult};
use fcm_core::error::FcmError;
use tracing::{debug, info, warn};

use crate::DEFAULT_FCM_BASE_URL;
use crate::contracts::FcmSendRequest;

/// Posts one data-only message to the FCM HTTP v1 API. No retries.
#[derive(Clone)]
pub struct FcmSender {
    pub base_url: String,
    client: reqwest::Client,
}

impl Default for FcmSender {
    fn default() -> Self {
        Self::new(DEFAULT_FCM_BASE_URL)
    }
}

impl FcmSender {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn send_url(&self, project_id: &str) -> String {
        format!("{}/v1/projects/{}/messages:send", self.base_url, project_id)
    }

    pub async fn send(
        &self,
        device_token: &str,
        payload: &ActionPayload,
        project_id: &str,
        token: &AccessToken,
    ) -> Result<SendResult, FcmError> {
        let url = self.send_url(project_id);
        let request = FcmSendRequest::new(device_token, payload);
        debug!(%url, "sending FCM message");

        let res = self
            .client
            .post(&url)
            .header("Authorization", token.bearer_header())
            .json(&request)
            .send()
            .await
            .map_err(|e| FcmError::SendFailed(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FcmError::SendFailed(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "FCM rejected the message");
            return Ok(SendResult::Rejected {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                details: body,
            });
        }

        let response = serde_json::from_str(&body)
            .map_err(|e| FcmError::SendFailed(format!("invalid response body: {}", e)))?;
        info!(status = status.as_u16(), "FCM accepted the message");
        Ok(SendResult::Sent { response })
    }
}
