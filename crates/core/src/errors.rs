//! Core error types for the Tokenswap application.
//!
//! Every error here is recoverable: the caller repeats the triggering action
//! to retry. Nothing in the crate retries on its own.

use std::sync::Arc;

use thiserror::Error;
use tokenswap_market_data::{MarketDataError, RetryClass};

use crate::constants::PRICES_UNAVAILABLE_MESSAGE;
use crate::swap::SwapError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// `Clone` is required because one failed price fetch is delivered to every
/// caller that was waiting on it; the market data error is shared behind an
/// `Arc` for that reason.
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(Arc<MarketDataError>),

    #[error("Swap operation failed: {0}")]
    Swap(#[from] SwapError),

    #[error("Price cache error: {0}")]
    Cache(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<MarketDataError> for Error {
    fn from(err: MarketDataError) -> Self {
        Error::MarketData(Arc::new(err))
    }
}

impl Error {
    /// Retry classification for errors raised by a price source.
    pub fn retry_class(&self) -> Option<RetryClass> {
        match self {
            Error::MarketData(e) => Some(e.retry_class()),
            _ => None,
        }
    }

    /// Message suitable for a user-facing banner.
    pub fn user_message(&self) -> String {
        match self {
            Error::MarketData(_) => PRICES_UNAVAILABLE_MESSAGE.to_string(),
            Error::Swap(e) => e.to_string(),
            Error::Cache(_) | Error::Unexpected(_) => self.to_string(),
        }
    }
}
