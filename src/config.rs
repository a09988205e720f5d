use crate::error::{PetstoreError, PetstoreResult};
use crate::logging::log_debug;
use std::time::Duration;

/// Base URL of the public Petstore deployment the suite was written against.
pub const DEFAULT_BASE_URL: &str = "http://5.181.109.28:9090/api/v3";

/// Environment variable overriding [`PetstoreConfig::base_url`].
pub const BASE_URL_ENV: &str = "PETSTORE_BASE_URL";

/// Environment variable setting [`PetstoreConfig::request_timeout`] in whole seconds.
pub const TIMEOUT_ENV: &str = "PETSTORE_TIMEOUT_SECS";

/// Configuration for a [`PetstoreClient`](crate::PetstoreClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetstoreConfig {
    /// Service root including the versioned path prefix, e.g. `http://host:9090/api/v3`
    pub base_url: String,
    /// Per-request timeout. `None` keeps the HTTP library's default behaviour.
    pub request_timeout: Option<Duration>,
}

impl Default for PetstoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl PetstoreConfig {
    /// Configuration pointing at `base_url` with library-default timeouts
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to [`PetstoreConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`PetstoreError::Configuration`] if:
    /// - `PETSTORE_TIMEOUT_SECS` is not a non-negative integer
    /// - The resulting configuration fails [`validate`](Self::validate)
    pub fn from_env() -> PetstoreResult<Self> {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout = match std::env::var(TIMEOUT_ENV) {
            Ok(raw) => {
                let seconds = raw.trim().parse::<u64>().map_err(|e| {
                    PetstoreError::configuration_error(format!(
                        "{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}: {e}"
                    ))
                })?;
                Some(Duration::from_secs(seconds))
            }
            Err(_) => None,
        };

        let config = Self {
            base_url,
            request_timeout,
        };
        config.validate()?;

        log_debug!(
            base_url = %config.base_url,
            request_timeout_secs = config.request_timeout.map(|t| t.as_secs()),
            "Petstore configuration loaded from environment"
        );

        Ok(config)
    }

    /// Validate the configuration is complete
    ///
    /// # Errors
    ///
    /// Returns [`PetstoreError::Configuration`] if:
    /// - The base URL is empty or not an absolute `http`/`https` URL
    /// - The request timeout is zero
    pub fn validate(&self) -> PetstoreResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(PetstoreError::configuration_error(
                "Petstore base URL is required",
            ));
        }

        let url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            PetstoreError::configuration_error(format!(
                "Invalid Petstore base URL {:?}: {}",
                self.base_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PetstoreError::configuration_error(format!(
                "Petstore base URL must use http or https, got {}",
                url.scheme()
            )));
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(PetstoreError::configuration_error(
                "Request timeout must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Base URL without a trailing slash, ready for path concatenation
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
