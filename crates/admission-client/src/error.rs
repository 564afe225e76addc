//! # Submission Error Types
//!
//! Error types for configuration and submission.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Submission Error Categories                         │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Protocol            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Connection     │  │  HttpStatus             │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │  InvalidResponse        │ │
//! │  │  ConfigLoad/Save│  │                 │  │  SerializationFailed    │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Internal: Unexpected (a panic caught around the request)              │
//! │                                                                         │
//! │  Whatever the category, the applicant sees one generic message.       │
//! │  The detail goes to the log.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Everything that can go wrong between a valid record and a 2xx response.
#[derive(Debug, Error)]
pub enum SubmitError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid intake configuration.
    #[error("Invalid intake configuration: {0}")]
    InvalidConfig(String),

    /// Endpoint or base URL could not be parsed or resolved.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request never got a response (DNS, refused, reset, TLS).
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    // =========================================================================
    // Protocol Errors
    // =========================================================================
    /// The API answered with a status outside 200-299.
    #[error("Admissions API returned HTTP {0}")]
    HttpStatus(u16),

    /// A 2xx response whose body is not JSON.
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    /// The record could not be turned into a request body.
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// The transport panicked while the request was in flight.
    #[error("Unexpected submission failure: {0}")]
    Unexpected(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmitError::Timeout
        } else if let Some(status) = err.status() {
            SubmitError::HttpStatus(status.as_u16())
        } else if err.is_decode() {
            SubmitError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            SubmitError::InvalidUrl(err.to_string())
        } else {
            SubmitError::ConnectionFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::SerializationFailed(err.to_string())
    }
}

impl From<url::ParseError> for SubmitError {
    fn from(err: url::ParseError) -> Self {
        SubmitError::InvalidUrl(err.to_string())
    }
}

impl From<std::io::Error> for SubmitError {
    fn from(err: std::io::Error) -> Self {
        SubmitError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for SubmitError {
    fn from(err: toml::de::Error) -> Self {
        SubmitError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for SubmitError {
    fn from(err: toml::ser::Error) -> Self {
        SubmitError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl SubmitError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SubmitError::InvalidConfig(_)
                | SubmitError::InvalidUrl(_)
                | SubmitError::ConfigLoadFailed(_)
                | SubmitError::ConfigSaveFailed(_)
        )
    }

    /// Returns true if the request never produced a response.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            SubmitError::ConnectionFailed(_) | SubmitError::Timeout
        )
    }
}
