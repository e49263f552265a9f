//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all price source operations
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while fetching prices from a source.
///
/// Each variant is classified into a [`RetryClass`] via the [`retry_class`](Self::retry_class)
/// method. Retries are never automatic; the class only tells the caller whether
/// re-invoking the action is worthwhile.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The source rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The source that rate limited the request
        provider: String,
    },

    /// The request to the source timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The source that timed out
        provider: String,
    },

    /// The source answered with a non-success status or refused the request.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The source that returned the error
        provider: String,
        /// The error message from the source
        message: String,
    },

    /// The source answered, but the payload could not be decoded.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The source that sent the payload
        provider: String,
        /// What was wrong with it
        message: String,
    },

    /// A network error occurred while communicating with a source.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the retry classification for this error.
    ///
    /// - [`RetryClass::Never`]: the payload itself is bad, retrying returns the same thing
    /// - [`RetryClass::WithBackoff`]: transient pressure on the source, wait before retrying
    /// - [`RetryClass::Retryable`]: the source or the network failed, retry at will
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenswap_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::RateLimited { provider: "PRICE_FEED".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::InvalidResponse { .. } => RetryClass::Never,

            Self::RateLimited { .. } | Self::Timeout { .. } => RetryClass::WithBackoff,

            Self::ProviderError { .. } | Self::Network(_) => RetryClass::Retryable,
        }
    }
}
