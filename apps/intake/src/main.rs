//! # Admission Intake Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load intake configuration (defaults → intake.toml → environment)
//! 3. Build the HTTP client and the submission controller
//! 4. Run the prompt loop until the applicant is done or stdin closes

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match admission_intake::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("admission-intake: {e}");
            ExitCode::FAILURE
        }
    }
}
