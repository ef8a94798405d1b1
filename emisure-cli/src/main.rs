use clap::{Parser, builder::styling};
use colored::*;
use fcm_client::{FcmClientConfig, FcmClientService, default_credentials_path};
use fcm_core::contracts::Action;
use fcm_core::error::FcmError;
use fcm_core::logging::ConsoleFcmLogger;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use anyhow::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod report;
use report::*;

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(
    name = "send-fcm",
    author,
    version,
    about = "send-fcm: push a remote-control action to an Emisure device",
    long_about = "Authenticates with a Firebase service account and sends one data-only FCM message carrying the requested action to a device token.",
    after_help = actions_help(),
    styles = STYLES
)]
struct Args {
    #[arg(help = "The action to send (see list below)")]
    action: Option<String>,

    #[arg(help = "FCM device token; falls back to --default-token")]
    device_token: Option<String>,

    #[arg(long, env = "FCM_SA_PATH", help = "Path to the service account JSON [default: next to the executable]")]
    credentials: Option<PathBuf>,

    #[arg(long, env = "FCM_DEFAULT_TOKEN", hide_env_values = true, help = "Device token used when none is given")]
    default_token: Option<String>,

    #[arg(long, default_value_t = false, help = "Sign the JWT assertion manually instead of using the OAuth library")]
    manual_jwt: bool,

    #[arg(short, long, default_value_t = false, help = "Log raw requests and responses")]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> (Option<String>, Option<String>, FcmClientConfig) {
        let mut config = FcmClientConfig {
            credentials_path: self.credentials.unwrap_or_else(default_credentials_path),
            default_device_token: self.default_token,
            force_manual_jwt: self.manual_jwt,
            ..Default::default()
        };
        if self.verbose {
            config.logger = Some(Arc::new(ConsoleFcmLogger));
        }
        (self.action, self.device_token, config)
    }
}

async fn run(action: Option<String>, device_token: Option<String>, config: FcmClientConfig) -> Result<bool> {
    let Some(action) = action else {
        print_usage();
        return Ok(false);
    };

    let service = FcmClientService::new(config);

    let action = match Action::from_str(&action) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            eprintln!("Valid actions: {}", Action::valid_names().join(", "));
            return Ok(false);
        }
    };

    let device_token = match service.resolve_device_token(device_token.as_deref()) {
        Ok(token) => {
            if device_token.is_none() {
                println!("Using default FCM token from configuration");
            }
            token
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            eprintln!("Either pass the token as an argument or set --default-token / FCM_DEFAULT_TOKEN.");
            return Ok(false);
        }
    };

    let account = match service.load_account() {
        Ok(account) => account,
        Err(e @ FcmError::CredentialNotFound { .. }) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            eprintln!("{}", credential_remediation(&service.config().credentials_path));
            return Ok(false);
        }
        Err(e) => return Err(e.into()),
    };

    println!("Project ID: {}", account.project_id.bright_magenta());
    println!("Action: {}", action.as_str().bright_cyan());
    println!("FCM Token: {}", token_preview(&device_token));
    println!();

    let payload = action.payload();
    println!("Sending data payload: {}", serde_json::to_string_pretty(&payload)?);
    println!();

    let provider = service.token_provider(&account)?;
    let result = service
        .send_with(provider.as_ref(), &account.project_id, &device_token, &payload)
        .await?;

    let body = serde_json::to_string_pretty(&result.to_json())?;
    if result.is_success() {
        println!("{}", "✅ Message sent successfully!".bright_green().bold());
        println!("Response: {}", body);
        Ok(true)
    } else {
        eprintln!("{}", "❌ Failed to send message".bright_red().bold());
        eprintln!("Error: {}", body);
        Ok(false)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    let (action, device_token, config) = args.into_config();
    debug!(credentials = %config.credentials_path.display(), manual_jwt = config.force_manual_jwt, "configuration loaded");
    match run(action, device_token, config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
