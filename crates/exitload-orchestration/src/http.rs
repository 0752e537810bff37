//! Blocking HTTP client for the calculation endpoint.

use std::time::Duration;

use tracing::debug;

use exitload_core::constants::CALCULATE_PATH;
use exitload_core::request::CalculationRequest;
use exitload_core::result::CalculationResult;

use crate::error::ServiceError;
use crate::interfaces::CalculationService;

/// Default endpoint base URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for [`HttpCalculationService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServiceConfig {
    /// Scheme, host and port, e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for HttpServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Posts requests to `{base_url}/calculate-exit-load`.
pub struct HttpCalculationService {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpCalculationService {
    /// Build a client. The base URL must be `http` or `https` and the
    /// timeout non-zero.
    pub fn new(config: &HttpServiceConfig) -> Result<Self, ServiceError> {
        if config.timeout.is_zero() {
            return Err(ServiceError::Config("timeout must be > 0".into()));
        }
        let base = config.base_url.trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ServiceError::Config(format!(
                "endpoint must start with http:// or https://, got {:?}",
                config.base_url
            )));
        }

        let client = reqwest::blocking::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServiceError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            url: format!("{base}{CALCULATE_PATH}"),
            client,
        })
    }

    /// Full URL requests are posted to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CalculationService for HttpCalculationService {
    fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResult, ServiceError> {
        debug!(url = %self.url, ?request, "posting calculation request");

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        CalculationResult::from_json(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}
