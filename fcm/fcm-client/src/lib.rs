use std::path::PathBuf;
use std::sync::Arc;

use fcm_core::{
    TokenProvider,
    contracts::{Action, ActionPayload, SendResult},
    error::FcmError,
    logging::IFcmLogger,
};
use fcm_provider_google::contracts::{FcmSendRequest, ServiceAccount};
use fcm_provider_google::fcm_sender::FcmSender;
use fcm_provider_google::jwt_token_provider::JwtTokenProvider;
#[cfg(feature = "oauth-library")]
use fcm_provider_google::oauth_token_provider::OAuthLibraryTokenProvider;
pub use fcm_provider_google::{DEFAULT_FCM_BASE_URL, DEFAULT_TOKEN_URI};
use serde_json::json;
use tracing::{info, warn};

/// File name looked up next to the executable when no path is configured.
pub const SERVICE_ACCOUNT_FILE_NAME: &str = "service-account.json";

/// Configuration for the FCM client service.
/// Everything the run needs is passed in here; nothing is read from globals.
#[derive(Debug, Clone)]
pub struct FcmClientConfig {
    /// Path to the service-account key JSON.
    pub credentials_path: PathBuf,
    /// Device token used when none is given on the command line.
    pub default_device_token: Option<String>,
    /// Overrides the OAuth2 token endpoint (and the JWT audience).
    pub token_uri: Option<String>,
    /// Base URL of the FCM HTTP v1 API.
    pub fcm_base_url: String,
    /// Skip the OAuth library even when it is compiled in.
    pub force_manual_jwt: bool,
    /// Optional logger for requests and responses.
    pub logger: Option<Arc<dyn IFcmLogger>>,
}

impl Default for FcmClientConfig {
    fn default() -> Self {
        Self {
            credentials_path: default_credentials_path(),
            default_device_token: None,
            token_uri: None,
            fcm_base_url: DEFAULT_FCM_BASE_URL.to_string(),
            force_manual_jwt: false,
            logger: None,
        }
    }
}

/// `service-account.json` in the directory holding the running executable.
pub fn default_credentials_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(SERVICE_ACCOUNT_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(SERVICE_ACCOUNT_FILE_NAME))
}

/// How bearer tokens are obtained for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStrategy {
    OAuthLibrary,
    ManualJwt,
}

/// Picks the token strategy once at startup: the OAuth library when it was
/// compiled in and not overridden, the hand-built JWT otherwise.
pub fn probe_token_strategy(config: &FcmClientConfig) -> TokenStrategy {
    if config.force_manual_jwt || !cfg!(feature = "oauth-library") {
        TokenStrategy::ManualJwt
    } else {
        TokenStrategy::OAuthLibrary
    }
}

/// Result of a full send, with what was actually sent.
#[derive(Debug, Clone)]
pub struct SendReport {
    pub project_id: String,
    pub strategy: &'static str,
    pub result: SendResult,
}

/// Runs credential loading, token exchange and the send, in that order.
pub struct FcmClientService {
    config: FcmClientConfig,
    sender: FcmSender,
    logger: Option<Arc<dyn IFcmLogger>>,
}

impl FcmClientService {
    /// Creates a new `FcmClientService` with the given configuration.
    pub fn new(config: FcmClientConfig) -> Self {
        let logger = config.logger.clone();
        let sender = FcmSender::new(config.fcm_base_url.clone());
        Self {
            config,
            sender,
            logger,
        }
    }

    pub fn config(&self) -> &FcmClientConfig {
        &self.config
    }

    /// Explicit token wins; otherwise the configured default; otherwise `MissingToken`.
    pub fn resolve_device_token(&self, explicit: Option<&str>) -> Result<String, FcmError> {
        explicit
            .or(self.config.default_device_token.as_deref())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .ok_or(FcmError::MissingToken)
    }

    pub fn load_account(&self) -> Result<ServiceAccount, FcmError> {
        ServiceAccount::from_file(&self.config.credentials_path)
    }

    /// Builds the token provider chosen by [`probe_token_strategy`].
    pub fn token_provider(&self, account: &ServiceAccount) -> Result<Box<dyn TokenProvider>, FcmError> {
        let provider: Box<dyn TokenProvider> = match probe_token_strategy(&self.config) {
            #[cfg(feature = "oauth-library")]
            TokenStrategy::OAuthLibrary => {
                let provider = match &self.config.token_uri {
                    Some(uri) => OAuthLibraryTokenProvider::with_token_uri(account, uri)?,
                    None => OAuthLibraryTokenProvider::new(account)?,
                };
                Box::new(provider)
            }
            #[cfg(not(feature = "oauth-library"))]
            TokenStrategy::OAuthLibrary => {
                warn!("OAuth library not compiled in; using manual JWT");
                Box::new(self.jwt_provider(account))
            }
            TokenStrategy::ManualJwt => Box::new(self.jwt_provider(account)),
        };
        info!(strategy = provider.name(), "Token strategy selected");
        Ok(provider)
    }

    fn jwt_provider(&self, account: &ServiceAccount) -> JwtTokenProvider {
        let provider = JwtTokenProvider::new(account.clone());
        match &self.config.token_uri {
            Some(uri) => provider.with_token_uri(uri.clone()),
            None => provider,
        }
    }

    /// Loads the key, probes the token strategy and sends `action` to `device_token`.
    pub async fn send_action(&self, action: Action, device_token: &str) -> Result<SendReport, FcmError> {
        let account = self.load_account()?;
        let provider = self.token_provider(&account)?;
        let result = self
            .send_with(provider.as_ref(), &account.project_id, device_token, &action.payload())
            .await?;
        Ok(SendReport {
            project_id: account.project_id.clone(),
            strategy: provider.name(),
            result,
        })
    }

    /// Exchanges one token from `provider`, then performs exactly one send.
    pub async fn send_with(
        &self,
        provider: &dyn TokenProvider,
        project_id: &str,
        device_token: &str,
        payload: &ActionPayload,
    ) -> Result<SendResult, FcmError> {
        if let Some(logger) = &self.logger {
            logger.log_request("token", provider.name(), json!({ "strategy": provider.name() }));
        }
        let token = provider.access_token().await?;
        if let Some(logger) = &self.logger {
            logger.log_response("token", provider.name(), true, serde_json::Value::Null);
        }

        let url = self.sender.send_url(project_id);
        if let Some(logger) = &self.logger {
            logger.log_request(
                "send",
                &url,
                serde_json::to_value(FcmSendRequest::new(device_token, payload))
                    .unwrap_or(serde_json::Value::Null),
            );
        }

        let result = self.sender.send(device_token, payload, project_id, &token).await?;

        if let Some(logger) = &self.logger {
            logger.log_response("send", &url, result.is_success(), result.to_json());
        }
        if let SendResult::Rejected { status, .. } = &result {
            warn!(status, "send rejected");
        }
        Ok(result)
    }
}
