pub mod service_account;
pub use service_account::ServiceAccount;

pub mod google_claims;
pub use google_claims::{GoogleClaims, JwtHeader};

pub mod models;
pub use models::{
    GoogleAccessToken,
    FcmSendRequest,
    FcmMessage,
    FcmAndroidConfig
};
