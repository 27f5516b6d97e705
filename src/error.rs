use reqwest::StatusCode;
use thiserror::Error;

/// All different error types this crate uses.
#[derive(Error, Debug)]
pub enum PagelexError {
    /// Failed to get a response.
    #[error("Request failed: {error}")]
    HttpRequestFailure {
        /// The reqwest error.
        #[from]
        error: reqwest::Error,
    },
    /// Received a response, but not a 2xx one, while only successes were
    /// accepted.
    #[error("Expected a 2xx Success but got: {status}")]
    NoHttpSuccess {
        /// Statuscode of the error response.
        status: StatusCode,
    },
    /// A stemming rule that doesn't follow the rule grammar.
    #[error("Invalid stemming rule: {rule:?}")]
    InvalidStemmingRule {
        /// The offending rule.
        rule: String,
    },
}
