use fcm_core::contracts::ActionPayload;
use serde::{Serialize, Deserialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GoogleAccessToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Body of `POST /v1/projects/{project}/messages:send`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct FcmSendRequest {
    pub message: FcmMessage,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct FcmMessage {
    pub token: String,
    pub data: ActionPayload,
    pub android: FcmAndroidConfig,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct FcmAndroidConfig {
    pub priority: String,
}

impl FcmSendRequest {
    /// Data-only message at high Android priority so the device wakes immediately.
    pub fn new(device_token: &str, payload: &ActionPayload) -> Self {
        Self {
            message: FcmMessage {
                token: device_token.to_string(),
                data: payload.clone(),
                android: FcmAndroidConfig {
                    priority: "high".to_string(),
                },
            },
        }
    }
}
