use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::Currency;

/// A single price observation for one currency.
///
/// Sources may report several points per currency; consumers keep the most
/// recent positive one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Currency symbol exactly as the source spelled it
    pub currency: Currency,

    /// When the price was observed
    pub date: DateTime<Utc>,

    /// Unit price (may be zero or negative in raw feeds)
    pub price: Decimal,
}

impl PricePoint {
    pub fn new(currency: impl Into<Currency>, date: DateTime<Utc>, price: Decimal) -> Self {
        Self {
            currency: currency.into(),
            date,
            price,
        }
    }

    /// Whether this point carries a usable price.
    pub fn is_priced(&self) -> bool {
        self.price > Decimal::ZERO
    }
}
