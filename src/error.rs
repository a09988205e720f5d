//! Error types for Petstore test cases.
//!
//! Every failure a test case can report is a [`PetstoreError`]:
//! - Assertion failures (unexpected status code, body text or field value)
//! - Schema validation failures (see [`SchemaValidationError`])
//! - Network or service errors from the HTTP client
//! - Fixture failures (the precondition resource could not be created)
//! - Configuration errors (invalid base URL or environment values)
//!
//! Nothing here is retried: every request is attempted exactly once and the
//! first failure aborts the current test case.
//!
//! # Result Type
//!
//! Use [`PetstoreResult<T>`] as a convenient alias for `Result<T, PetstoreError>`:
//!
//! ```rust
//! use petstore_api_tests::PetstoreResult;
//!
//! fn my_check() -> PetstoreResult<()> {
//!     Ok(())
//! }
//! ```

use crate::logging::{log_error, log_warn};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of test failures.
///
/// Use [`PetstoreError::category()`] to get the category for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The service answered, but not with what the test case expected.
    Assertion,

    /// A response body does not conform to its declared schema.
    Schema,

    /// The service could not be reached or answered with an unreadable body.
    External,

    /// The suite itself is misconfigured (bad base URL, bad env values).
    Client,
}

// ============================================================================
// Schema validation errors
// ============================================================================

/// A single offending location found while validating a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON pointer to the offending value (empty for the document root).
    pub instance_path: String,
    /// What is wrong at that location.
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "<root>: {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// A response body was rejected by a resource schema.
///
/// Carries every violation found, not just the first one, so a failing test
/// shows all missing fields and type mismatches at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{schema} schema validation failed: {}", join_violations(.violations))]
pub struct SchemaValidationError {
    /// Name of the schema that rejected the instance.
    pub schema: &'static str,
    /// All offending locations, in the order the validator reported them.
    pub violations: Vec<SchemaViolation>,
}

impl SchemaValidationError {
    pub fn new(schema: &'static str, violations: Vec<SchemaViolation>) -> Self {
        Self { schema, violations }
    }

    /// Whether any violation points at `instance_path` or mentions `field` in its message.
    ///
    /// Required-property and additional-property violations are reported on the
    /// parent object, so the field name only shows up in the message.
    pub fn mentions(&self, field: &str) -> bool {
        let pointer = format!("/{field}");
        let double_quoted = format!("\"{field}\"");
        let single_quoted = format!("'{field}'");
        self.violations.iter().any(|v| {
            v.instance_path == pointer
                || v.message.contains(&double_quoted)
                || v.message.contains(&single_quoted)
        })
    }
}

fn join_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Petstore error types
// ============================================================================

/// Convenient result type for test cases, fixtures and client calls.
pub type PetstoreResult<T> = std::result::Result<T, PetstoreError>;

/// Errors that can fail a Petstore test case.
///
/// # Error Categories
///
/// | Variant | Category |
/// |---------|----------|
/// | `AssertionFailed` | Assertion |
/// | `FixtureFailed` | Assertion |
/// | `SchemaValidation` | Schema |
/// | `RequestFailed` | External |
/// | `ResponseParsing` | External |
/// | `Configuration` | Client |
#[derive(Error, Debug)]
pub enum PetstoreError {
    /// An expectation about the response did not hold.
    ///
    /// The message names the expectation together with the expected and the
    /// observed value.
    #[error("{expectation}: expected {expected}, got {actual}")]
    AssertionFailed {
        /// What was being checked.
        expectation: String,
        /// The value the test case expected.
        expected: String,
        /// The value the service actually returned.
        actual: String,
    },

    /// A response body did not match its resource schema.
    #[error(transparent)]
    SchemaValidation(SchemaValidationError),

    /// The HTTP request could not be completed.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The response body could not be decoded as the expected JSON.
    #[error("Response parsing failed: {message}")]
    ResponseParsing {
        /// Details about the parsing failure.
        message: String,
    },

    /// A fixture could not create its precondition resource.
    #[error("Fixture {fixture} failed: expected status 200, got {status} (body: {body})")]
    FixtureFailed {
        /// Name of the fixture.
        fixture: &'static str,
        /// Status returned by the create endpoint.
        status: u16,
        /// Raw response body returned by the create endpoint.
        body: String,
    },

    /// Suite configuration is invalid.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl PetstoreError {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AssertionFailed { .. } | Self::FixtureFailed { .. } => ErrorCategory::Assertion,
            Self::SchemaValidation(_) => ErrorCategory::Schema,
            Self::RequestFailed { .. } | Self::ResponseParsing { .. } => ErrorCategory::External,
            Self::Configuration { .. } => ErrorCategory::Client,
        }
    }

    /// The schema error, if this failure came from schema validation.
    pub fn as_schema_error(&self) -> Option<&SchemaValidationError> {
        match self {
            Self::SchemaValidation(err) => Some(err),
            _ => None,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================
    //
    // These methods automatically log the error at the appropriate level.
    // Use them instead of constructing variants directly.

    /// Create an assertion failure (logs at WARN level).
    pub fn assertion_failed(
        expectation: impl Into<String>,
        expected: impl fmt::Debug,
        actual: impl fmt::Debug,
    ) -> Self {
        let expectation = expectation.into();
        let expected = format!("{expected:?}");
        let actual = format!("{actual:?}");
        log_warn!(
            error_type = "assertion_failed",
            expectation = %expectation,
            expected = %expected,
            actual = %actual,
            "Petstore expectation not met"
        );
        Self::AssertionFailed {
            expectation,
            expected,
            actual,
        }
    }

    pub fn schema_validation_failed(error: SchemaValidationError) -> Self {
        log_warn!(
            error_type = "schema_validation_failed",
            schema = error.schema,
            violations = error.violations.len(),
            message = %error,
            "Response body rejected by schema"
        );
        Self::SchemaValidation(error)
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Petstore request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "Petstore response body invalid"
        );
        Self::ResponseParsing { message }
    }

    pub fn fixture_failed(fixture: &'static str, status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        log_error!(
            error_type = "fixture_failed",
            fixture = fixture,
            status = status,
            body = %body,
            "Fixture could not create its resource"
        );
        Self::FixtureFailed {
            fixture,
            status,
            body,
        }
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Petstore suite configuration invalid"
        );
        Self::Configuration { message }
    }
}

impl From<SchemaValidationError> for PetstoreError {
    fn from(error: SchemaValidationError) -> Self {
        Self::schema_validation_failed(error)
    }
}
