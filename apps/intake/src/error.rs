//! # App Error Type
//!
//! Failures that stop the terminal front end. Submission failures are not
//! among them: those become a notification and the form stays usable.

use thiserror::Error;

use admission_client::SubmitError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The admissions endpoint could not be set up.
    #[error("Configuration error: {0}")]
    Config(#[from] SubmitError),

    /// Reading the applicant's input or writing the form failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
