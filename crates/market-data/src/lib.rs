//! Tokenswap Market Data Crate
//!
//! This crate provides source-agnostic token price fetching for the
//! Tokenswap application.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+
//! |   PriceSource    | --> |   PricePoint[]   |  (raw, possibly duplicated)
//! +------------------+     +------------------+
//!   |           |
//!   v           v
//! HttpPriceSource  StaticPriceSource
//! ```
//!
//! A source returns every price point it knows about. Deduplication,
//! filtering and caching are the caller's concern (see `tokenswap-core`).
//!
//! # Core Types
//!
//! - [`PricePoint`] - A single `{currency, date, price}` observation
//! - [`PriceSource`] - Trait implemented by every price backend
//! - [`MarketDataError`] - Errors raised while talking to a source
//! - [`RetryClass`] - How an operator-initiated retry is expected to behave

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{MarketDataError, RetryClass};
pub use models::{Currency, PricePoint};
pub use provider::http::{parse_price_records, HttpPriceSource, DEFAULT_PRICES_URL};
pub use provider::static_source::StaticPriceSource;
pub use provider::PriceSource;
