use std::process::{Command, Output};
use tempfile::TempDir;

fn send_fcm(args: &[&str], credentials: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_send-fcm"))
        .args(args)
        .arg("--credentials")
        .arg(credentials)
        .env_remove("FCM_DEFAULT_TOKEN")
        .env_remove("FCM_SA_PATH")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_help_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_send-fcm"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--manual-jwt"));
    assert!(stdout.contains("release_device"));
}

#[test]
fn test_cli_without_action_prints_usage_and_fails() {
    let dir = TempDir::new().unwrap();
    let output = send_fcm(&[], &dir.path().join("service-account.json"));

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("send-fcm <action> [device_token]"));
    assert!(stdout.contains("enforce_notifications"));
}

#[test]
fn test_cli_invalid_action() {
    let dir = TempDir::new().unwrap();
    let output = send_fcm(&["reboot", "device-token"], &dir.path().join("service-account.json"));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid action 'reboot'"));
    assert!(stderr.contains("Valid actions:"));
    // Rejected before the credential file is even looked at.
    assert!(!stderr.contains("Service account file not found"));
}

#[test]
fn test_cli_missing_token() {
    let dir = TempDir::new().unwrap();
    let output = send_fcm(&["unlock"], &dir.path().join("service-account.json"));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No FCM token provided"));
}

#[test]
fn test_cli_missing_credentials() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("service-account.json");
    let output = send_fcm(&["lock", "device-token"], &path);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Service account file not found"));
    assert!(stderr.contains("Generate new private key"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Sending data payload"));
}

#[test]
fn test_cli_malformed_credentials() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("service-account.json");
    std::fs::write(&path, r#"{"client_email": "a@b.c"}"#).unwrap();
    let output = send_fcm(&["status", "device-token"], &path);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed"));
    assert!(stderr.contains("private_key"));
}
