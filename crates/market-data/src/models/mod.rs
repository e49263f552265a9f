//! Market data models
//!
//! - `types` - Type aliases for common identifiers (Currency)
//! - `price_point` - A single price observation (PricePoint)

mod price_point;
mod types;

pub use price_point::PricePoint;
pub use types::Currency;
