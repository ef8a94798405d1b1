//! Failure taxonomy shared by every crate in the workspace.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FcmError {
    #[error("Service account file not found: {}", path.display())]
    CredentialNotFound { path: PathBuf },

    #[error("Service account file is malformed: {0}")]
    CredentialMalformed(String),

    #[error("Invalid action '{0}'")]
    InvalidAction(String),

    #[error("No FCM token provided and no default token is configured")]
    MissingToken,

    #[error("Token exchange failed: {0}")]
    TokenExchangeFailed(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FcmError>;
