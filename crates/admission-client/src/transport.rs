//! # Admissions API Transport
//!
//! The single outbound request: POST the validated record as JSON.
//!
//! ## Request / Response
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST {endpoint}                                                        │
//! │  Content-Type: application/json                                         │
//! │                                                                         │
//! │  { "fullName": ..., "faculty": ..., "department": ...,                  │
//! │    "university": ..., "whatsappNumber": ..., "email": ... }             │
//! │                                                                         │
//! │  2xx + JSON body ──────────► Ok(body)                                   │
//! │  2xx + non-JSON body ──────► Err(InvalidResponse)                       │
//! │  any other status ─────────► Err(HttpStatus(code))                      │
//! │  refused / reset / DNS ────► Err(ConnectionFailed)                      │
//! │  no answer in time ────────► Err(Timeout)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No retries happen here; the applicant retries by submitting again.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use admission_core::ApplicationRecord;

use crate::config::IntakeConfig;
use crate::error::{SubmitError, SubmitResult};

/// Anything that can accept an application on behalf of the admissions
/// office. The HTTP implementation is [`HttpAdmissionsApi`]; tests plug in
/// fakes.
#[async_trait]
pub trait AdmissionsApi: Send + Sync {
    /// Sends one application. `Ok` carries the parsed response body.
    async fn submit_application(&self, record: &ApplicationRecord) -> SubmitResult<Value>;
}

/// Reqwest-backed admissions API client posting to one endpoint.
#[derive(Debug, Clone)]
pub struct HttpAdmissionsApi {
    client: Client,
    endpoint: Url,
}

impl HttpAdmissionsApi {
    /// Builds a client with a whole-request timeout.
    pub fn new(endpoint: Url, timeout: Duration) -> SubmitResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Builds a client from the resolved endpoint and timeout in `config`.
    ///
    /// The config is validated first, so one built in code gets the same
    /// http(s) and timeout checks as one loaded from file.
    pub fn from_config(config: &IntakeConfig) -> SubmitResult<Self> {
        config.validate()?;
        Self::new(config.endpoint_url()?, config.timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AdmissionsApi for HttpAdmissionsApi {
    async fn submit_application(&self, record: &ApplicationRecord) -> SubmitResult<Value> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(record)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), endpoint = %self.endpoint, "Admissions API responded");
        if !status.is_success() {
            return Err(SubmitError::HttpStatus(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}
