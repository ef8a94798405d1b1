use fcm_core::TokenProvider;
use fcm_core::MockTokenProvider;
use fcm_core::contracts::{AccessToken, SendResult};
use fcm_core::error::FcmError;
use serde_json::json;

#[test]
fn test_access_token_debug_is_redacted() {
    let token = AccessToken::new("ya29.secret-value");
    assert_eq!(format!("{:?}", token), "AccessToken(***)");
    assert_eq!(token.secret(), "ya29.secret-value");
    assert_eq!(token.bearer_header(), "Bearer ya29.secret-value");
}

#[test]
fn test_send_result_json_shapes() {
    let sent = SendResult::Sent {
        response: json!({ "name": "projects/p/messages/1" }),
    };
    assert!(sent.is_success());
    assert_eq!(sent.to_json(), json!({ "name": "projects/p/messages/1" }));

    let rejected = SendResult::Rejected {
        status: 404,
        reason: "Not Found".to_string(),
        details: "{\"error\":{\"status\":\"NOT_FOUND\"}}".to_string(),
    };
    assert!(!rejected.is_success());
    assert_eq!(
        rejected.to_json(),
        json!({ "error": "Not Found", "details": "{\"error\":{\"status\":\"NOT_FOUND\"}}" })
    );
}

#[test]
fn test_error_messages() {
    let err = FcmError::CredentialNotFound {
        path: "/opt/emisure/service-account.json".into(),
    };
    assert_eq!(
        err.to_string(),
        "Service account file not found: /opt/emisure/service-account.json"
    );
    assert_eq!(FcmError::InvalidAction("reboot".into()).to_string(), "Invalid action 'reboot'");
}

#[tokio::test]
async fn test_mock_token_provider() {
    let mut provider = MockTokenProvider::new();
    provider
        .expect_access_token()
        .times(1)
        .returning(|| Ok(AccessToken::new("mocked")));
    provider.expect_name().return_const("mock");

    let token = provider.access_token().await.unwrap();
    assert_eq!(token.secret(), "mocked");
    assert_eq!(provider.name(), "mock");
}
