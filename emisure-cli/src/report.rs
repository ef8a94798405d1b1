use std::path::Path;

use colored::*;
use fcm_core::contracts::Action;

/// Action table shown under `--help` and when no action is given.
pub fn actions_help() -> String {
    let mut out = String::from("Actions:\n");
    for action in Action::ALL {
        out.push_str(&format!("  {:<22}- {}\n", action.as_str(), action.description()));
    }
    out
}

pub fn print_usage() {
    println!("{} send-fcm <action> [device_token]", "Usage:".bright_green().bold());
    println!("\nIf device_token is not provided, the configured default token is used.\n");
    print!("{}", actions_help());
}

pub fn credential_remediation(path: &Path) -> String {
    format!(
        "\nTo create one:\n\
         1. Go to Firebase Console → Project Settings → Service Accounts\n\
         2. Click 'Generate new private key'\n\
         3. Save as '{}'",
        path.display()
    )
}

/// First 20 characters of the device token; enough to identify it in logs.
pub fn token_preview(token: &str) -> String {
    let head: String = token.chars().take(20).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_help_lists_every_action() {
        let help = actions_help();
        for name in Action::valid_names() {
            assert!(help.contains(name), "missing {}", name);
        }
        assert!(help.contains("Lock device with payment screen"));
    }

    #[test]
    fn test_token_preview() {
        assert_eq!(
            token_preview("f6cB1sMFS5CISQNSkB1HHd:APA91bEOQWzs0c8OLbV1d"),
            "f6cB1sMFS5CISQNSkB1H..."
        );
        assert_eq!(token_preview("short"), "short...");
    }

    #[test]
    fn test_remediation_names_path() {
        let text = credential_remediation(Path::new("/opt/emisure/service-account.json"));
        assert!(text.contains("Generate new private key"));
        assert!(text.contains("/opt/emisure/service-account.json"));
    }
}
