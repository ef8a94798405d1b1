use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use fcm_core::TokenProvider;
use fcm_core::contracts::AccessToken;
use fcm_core::error::FcmError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::contracts::{GoogleAccessToken, GoogleClaims, JwtHeader, ServiceAccount};
use crate::{DEFAULT_TOKEN_URI, FCM_SCOPE, JWT_BEARER_GRANT_TYPE, TOKEN_LIFETIME_SECS};

/// Mints access tokens by signing a JWT assertion in-process and trading it
/// at the OAuth2 token endpoint (RFC 7523 jwt-bearer grant).
pub struct JwtTokenProvider {
    account: ServiceAccount,
    token_uri: String,
    client: reqwest::Client,
}

impl JwtTokenProvider {
    pub fn new(account: ServiceAccount) -> Self {
        let token_uri = account
            .token_uri
            .clone()
            .unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string());
        Self {
            account,
            token_uri,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_token_uri(mut self, token_uri: impl Into<String>) -> Self {
        self.token_uri = token_uri.into();
        self
    }

    pub fn token_uri(&self) -> &str {
        &self.token_uri
    }

    pub fn claims_at(&self, now: DateTime<Utc>) -> GoogleClaims {
        let iat = now.timestamp();
        GoogleClaims {
            iss: self.account.client_email.clone(),
            scope: FCM_SCOPE.to_owned(),
            aud: self.token_uri.clone(),
            iat,
            exp: iat + TOKEN_LIFETIME_SECS,
        }
    }

    /// Builds `header.claims.signature`, each part base64url without padding.
    pub fn build_assertion(&self, now: DateTime<Utc>) -> Result<String, FcmError> {
        let header = encode_segment(&JwtHeader::default())?;
        let claims = encode_segment(&self.claims_at(now))?;
        let signing_input = format!("{}.{}", header, claims);

        // Parsed key lives only for the duration of this call.
        let key = jsonwebtoken::EncodingKey::from_rsa_pem(self.account.private_key.as_bytes())
            .map_err(|e| FcmError::TokenExchangeFailed(format!("invalid private key: {}", e)))?;
        let signature = jsonwebtoken::crypto::sign(
            signing_input.as_bytes(),
            &key,
            jsonwebtoken::Algorithm::RS256,
        )
        .map_err(|e| FcmError::TokenExchangeFailed(format!("signing failed: {}", e)))?;
        drop(key);

        Ok(format!("{}.{}", signing_input, signature))
    }

    pub async fn exchange(&self, assertion: &str) -> Result<GoogleAccessToken, FcmError> {
        debug!(token_uri = %self.token_uri, "exchanging JWT assertion");

        let res = self
            .client
            .post(&self.token_uri)
            .form(&token_request_form(assertion))
            .send()
            .await
            .map_err(|e| FcmError::TokenExchangeFailed(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FcmError::TokenExchangeFailed(e.to_string()))?;
        if !status.is_success() {
            return Err(FcmError::TokenExchangeFailed(format!(
                "token endpoint returned {}: {}",
                status, body
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            FcmError::TokenExchangeFailed(format!("unexpected token response: {}", e))
        })
    }
}

#[async_trait]
impl TokenProvider for JwtTokenProvider {
    async fn access_token(&self) -> Result<AccessToken, FcmError> {
        info!(client_email = %self.account.client_email, "Creating new access token");

        let assertion = self.build_assertion(Utc::now())?;
        let response = self.exchange(&assertion).await?;

        info!(
            token_type = %response.token_type,
            expires_in = ?response.expires_in,
            "New access token created"
        );
        Ok(AccessToken::new(response.access_token))
    }

    fn name(&self) -> &'static str {
        "manual-jwt"
    }
}

/// Form fields of the jwt-bearer token request.
pub fn token_request_form(assertion: &str) -> [(&'static str, &str); 2] {
    [("grant_type", JWT_BEARER_GRANT_TYPE), ("assertion", assertion)]
}

/// JSON-serializes `value` and base64url-encodes it without padding.
pub fn encode_segment<T: Serialize>(value: &T) -> Result<String, FcmError> {
    let json = serde_json::to_vec(value)
        .map_err(|e| FcmError::TokenExchangeFailed(format!("cannot encode JWT segment: {}", e)))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, FcmError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| FcmError::TokenExchangeFailed(format!("invalid base64url segment: {}", e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| FcmError::TokenExchangeFailed(format!("invalid JWT segment: {}", e)))
}
