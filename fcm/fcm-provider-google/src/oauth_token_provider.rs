use async_trait::async_trait;
use fcm_core::TokenProvider;
use fcm_core::contracts::AccessToken;
use fcm_core::error::FcmError;
use serde::Serialize;
use tracing::info;
use yup_oauth2::{ServiceAccountAuthenticator, ServiceAccountKey};
use zeroize::Zeroizing;

use crate::contracts::ServiceAccount;
use crate::{DEFAULT_TOKEN_URI, FCM_SCOPE};

/// Key-file shape expected by `yup-oauth2`, borrowed so the PEM is not copied
/// into an intermediate JSON value.
#[derive(Serialize)]
struct LibraryKeyFile<'a> {
    #[serde(rename = "type")]
    key_type: &'a str,
    project_id: &'a str,
    client_email: &'a str,
    private_key: &'a str,
    token_uri: &'a str,
}

/// Delegates assertion signing, exchange and refresh to `yup-oauth2`.
pub struct OAuthLibraryTokenProvider {
    key: ServiceAccountKey,
}

impl OAuthLibraryTokenProvider {
    pub fn new(account: &ServiceAccount) -> Result<Self, FcmError> {
        let token_uri = account.token_uri.as_deref().unwrap_or(DEFAULT_TOKEN_URI);
        Self::with_token_uri(account, token_uri)
    }

    pub fn with_token_uri(account: &ServiceAccount, token_uri: &str) -> Result<Self, FcmError> {
        let raw = LibraryKeyFile {
            key_type: "service_account",
            project_id: &account.project_id,
            client_email: &account.client_email,
            private_key: &account.private_key,
            token_uri,
        };
        let raw = Zeroizing::new(
            serde_json::to_string(&raw).map_err(|e| FcmError::CredentialMalformed(e.to_string()))?,
        );
        let key = yup_oauth2::parse_service_account_key(raw.as_bytes())
            .map_err(|e| FcmError::CredentialMalformed(e.to_string()))?;
        Ok(Self { key })
    }

    pub fn token_uri(&self) -> &str {
        &self.key.token_uri
    }
}

#[async_trait]
impl TokenProvider for OAuthLibraryTokenProvider {
    async fn access_token(&self) -> Result<AccessToken, FcmError> {
        info!(client_email = %self.key.client_email, "Requesting access token via OAuth library");

        let auth = ServiceAccountAuthenticator::builder(self.key.clone())
            .build()
            .await
            .map_err(|e| FcmError::TokenExchangeFailed(e.to_string()))?;
        let token = auth
            .token(&[FCM_SCOPE])
            .await
            .map_err(|e| FcmError::TokenExchangeFailed(e.to_string()))?;

        token
            .token()
            .map(AccessToken::new)
            .ok_or_else(|| FcmError::TokenExchangeFailed("no access token in response".to_string()))
    }

    fn name(&self) -> &'static str {
        "oauth-library"
    }
}
