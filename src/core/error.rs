use thiserror::Error;

use crate::valuation::ParamError;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum DcfError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data provider answered with an error object instead of a result.
    #[error("provider error {code}: {description}")]
    Api {
        /// Short machine-readable code, e.g. `Unauthorized`.
        code: String,
        /// Human-readable description.
        description: String,
    },

    /// Cookie or crumb acquisition failed.
    #[error("authentication error: {0}")]
    Auth(String),

    /// The data received from the API was in an unexpected format.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The ticker symbol was empty or whitespace.
    #[error("ticker symbol must not be empty")]
    InvalidSymbol,

    /// Valuation parameters were rejected.
    #[error("invalid valuation parameters: {0}")]
    InvalidParams(#[from] ParamError),
}
