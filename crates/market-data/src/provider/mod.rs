//! Price source abstractions and implementations.
//!
//! This module contains:
//! - The `PriceSource` trait that all price backends implement
//! - `http`: the JSON price feed client
//! - `static_source`: a fixed, in-memory source for offline runs and tests

mod traits;

pub mod http;
pub mod static_source;

pub use traits::PriceSource;
