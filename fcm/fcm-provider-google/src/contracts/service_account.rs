use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use fcm_core::error::FcmError;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// The subset of a Google service-account key file needed to mint tokens.
///
/// The PEM key is wiped from memory when the value is dropped.
#[derive(Serialize, Deserialize, Clone, Zeroize, ZeroizeOnDrop)]
pub struct ServiceAccount {
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_uri: Option<String>,
}

impl ServiceAccount {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FcmError> {
        let path = path.as_ref();
        let content = match std::fs::read(path) {
            Ok(content) => Zeroizing::new(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FcmError::CredentialNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_slice(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, FcmError> {
        Self::from_slice(content.as_bytes())
    }

    /// Parses raw key-file bytes; bad encoding counts as malformed JSON.
    pub fn from_slice(content: &[u8]) -> Result<Self, FcmError> {
        let account: ServiceAccount = serde_json::from_slice(content)
            .map_err(|e| FcmError::CredentialMalformed(format!("invalid JSON: {}", e)))?;

        let missing: Vec<&str> = [
            ("client_email", &account.client_email),
            ("private_key", &account.private_key),
            ("project_id", &account.project_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(FcmError::CredentialMalformed(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )));
        }
        Ok(account)
    }
}

impl fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("client_email", &self.client_email)
            .field("private_key", &"***")
            .field("project_id", &self.project_id)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
