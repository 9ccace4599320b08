//! Error types for the E2E suite
//!
//! Every failure is hard: a failed step propagates with `?` and aborts
//! the rest of the scenario. Nothing here retries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("assertion failed: {what} (expected {expected}, got {actual})")]
    Assertion {
        what: String,
        expected: String,
        actual: String,
    },

    #[error("timed out waiting for: {0}")]
    Timeout(String),

    #[error("API contract violation: {0}")]
    ApiContract(String),

    #[error("browser driver error: {0}")]
    Driver(String),

    #[error("Playwright not found. Install with: npm install playwright && npx playwright install")]
    DriverNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SuiteError {
    /// Shorthand for an expectation mismatch.
    pub fn assertion(
        what: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        SuiteError::Assertion {
            what: what.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

pub type SuiteResult<T> = Result<T, SuiteError>;
