use std::fs;
use std::path::PathBuf;

use fcm_client::FcmClientConfig;
use serde_json::json;
use tempfile::TempDir;

pub const TEST_KEY: &str = include_str!("../../../fcm-provider-google/tests/fixtures/test_key.pem");
pub const PROJECT_ID: &str = "emisure-demo";

pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.temp_dir.path().join("service-account.json")
    }

    pub fn write_service_account(&self) -> PathBuf {
        let path = self.credentials_path();
        let content = json!({
            "type": "service_account",
            "project_id": PROJECT_ID,
            "private_key": TEST_KEY,
            "client_email": "fcm-sender@emisure-demo.iam.gserviceaccount.com"
        });
        fs::write(&path, content.to_string()).expect("Failed to write file");
        path
    }

    /// Manual JWT path pointed at `base_url` for both the token and send endpoints.
    pub fn config(&self, base_url: &str) -> FcmClientConfig {
        FcmClientConfig {
            credentials_path: self.credentials_path(),
            token_uri: Some(format!("{}/token", base_url)),
            fcm_base_url: base_url.to_string(),
            force_manual_jwt: true,
            ..Default::default()
        }
    }
}
