use async_trait::async_trait;

use crate::contracts::AccessToken;
use crate::error::FcmError;
pub mod contracts;
pub mod error;
pub mod logging;

/// Source of OAuth2 bearer tokens for the messaging API.
///
/// Implementations are chosen once at startup; each call mints a fresh token,
/// nothing is cached between calls.
#[mockall::automock]
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<AccessToken, FcmError>;

    /// Short label used in diagnostics ("oauth-library", "manual-jwt").
    fn name(&self) -> &'static str;
}
