//! # Admission Intake Library
//!
//! Terminal front end for the admission application form. It hosts one
//! form instance and draws it as a sequence of prompts.
//!
//! ## Module Organization
//! ```text
//! admission_intake/
//! ├── lib.rs          ◄─── You are here (logging, config, startup)
//! ├── session.rs      ◄─── Prompt loop around the SubmissionController
//! ├── render.rs       ◄─── Text rendering + notification queue
//! └── error.rs        ◄─── App error type
//! ```
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  header ──► prompt empty / failing fields ──► submit                    │
//! │                    ▲                              │                     │
//! │                    │            ┌─────────────────┼──────────────┐      │
//! │                    │            ▼                 ▼              ▼      │
//! │                    └──── Invalid (inline)   Failed: "Error"   Success!  │
//! │                                              retry? [Y/n]   another?    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod render;
pub mod session;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use admission_client::{HttpAdmissionsApi, IntakeConfig, SubmissionController, DEFAULT_ENDPOINT};

pub use error::{AppError, AppResult};
pub use render::ToastQueue;
pub use session::Session;

/// Where the hosted admission form posts when nothing else is configured.
pub const DEPLOYED_ENDPOINT: &str =
    "https://admission-form-backend-4sz2.onrender.com/api/admissions";

/// Runs the intake form on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info, admission crates at debug                          │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → intake.toml → ADMISSION_API_* environment              │
/// │     • a broken file or override stops startup with its own error        │
/// │     • no endpoint configured: post to the deployed admissions API       │
/// │                                                                         │
/// │  3. Build Controller ─────────────────────────────────────────────────► │
/// │     • HttpAdmissionsApi (reqwest) + ToastQueue notifier                 │
/// │                                                                         │
/// │  4. Run Session until the applicant quits or stdin closes               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> AppResult<()> {
    init_tracing();

    let config = load_config(None)?;
    let api = HttpAdmissionsApi::from_config(&config)?;
    info!(endpoint = %api.endpoint(), "Starting admission intake");

    let toasts = Arc::new(ToastQueue::new());
    let controller = Arc::new(SubmissionController::with_notifier(
        Arc::new(api),
        toasts.clone(),
    ));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut session = Session::new(controller, toasts, stdin, std::io::stdout());
    session.run().await
}

/// Loads the intake config, falling back to [`DEPLOYED_ENDPOINT`] when
/// neither the file nor the environment names an endpoint.
pub fn load_config(config_path: Option<PathBuf>) -> AppResult<IntakeConfig> {
    Ok(with_deployed_endpoint(IntakeConfig::load(config_path)?))
}

fn with_deployed_endpoint(mut config: IntakeConfig) -> IntakeConfig {
    if config.api.endpoint == DEFAULT_ENDPOINT && config.api.base_url.is_none() {
        debug!(endpoint = DEPLOYED_ENDPOINT, "No endpoint configured, using deployed API");
        config.api.endpoint = DEPLOYED_ENDPOINT.to_string();
    }
    config
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so they never interleave with the prompts.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=admission=trace` - Trace for the admission crates only
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,admission=debug,reqwest=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use admission_client::SubmitError;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("intake-app-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_unconfigured_endpoint_uses_deployed_api() {
        let config = with_deployed_endpoint(IntakeConfig::default());
        assert_eq!(config.api.endpoint, DEPLOYED_ENDPOINT);

        let api = HttpAdmissionsApi::from_config(&config).unwrap();
        assert_eq!(api.endpoint().as_str(), DEPLOYED_ENDPOINT);
    }

    #[test]
    fn test_missing_config_file_still_starts() {
        let config = load_config(Some(PathBuf::from("/nonexistent/intake.toml"))).unwrap();
        assert!(HttpAdmissionsApi::from_config(&config).is_ok());
    }

    #[test]
    fn test_configured_endpoint_is_kept() {
        let absolute = with_deployed_endpoint(IntakeConfig::with_endpoint(
            "https://forms.example.org/api/admissions",
        ));
        assert_eq!(absolute.api.endpoint, "https://forms.example.org/api/admissions");

        let mut relative = IntakeConfig::default();
        relative.api.base_url = Some("http://localhost:3000".into());
        let relative = with_deployed_endpoint(relative);
        assert_eq!(relative.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(
            relative.endpoint_url().unwrap().as_str(),
            "http://localhost:3000/api/admissions"
        );
    }

    #[test]
    fn test_broken_config_file_stops_startup() {
        let unparsable = scratch_file("unparsable.toml", "[api\nendpoint = ");
        let err = load_config(Some(unparsable)).unwrap_err();
        assert!(matches!(err, AppError::Config(SubmitError::ConfigLoadFailed(_))));

        let zero_timeout = scratch_file("zero-timeout.toml", "[api]\ntimeout_secs = 0\n");
        let err = load_config(Some(zero_timeout)).unwrap_err();
        assert!(matches!(err, AppError::Config(SubmitError::InvalidConfig(_))));
        assert!(!err.to_string().contains("base_url"));
    }
}
