pub mod contracts;
pub mod fcm_sender;
pub mod jwt_token_provider;
#[cfg(feature = "oauth-library")]
pub mod oauth_token_provider;

/// OAuth2 scope granting access to the FCM HTTP v1 API.
pub const FCM_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

pub const DEFAULT_FCM_BASE_URL: &str = "https://fcm.googleapis.com";

pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for every assertion, in seconds.
pub const TOKEN_LIFETIME_SECS: i64 = 60 * 60;
