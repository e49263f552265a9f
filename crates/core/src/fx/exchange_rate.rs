use std::str::FromStr;

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::prices::PriceData;
use crate::tokens::Token;

/// Below this a rate is shown in exponential notation.
const EXPONENTIAL_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 4);

/// From this magnitude on only two decimals are shown.
const LARGE_RATE_THRESHOLD: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Units of the destination token received per unit of the source token.
///
/// A zero rate means "undefined" (a price is missing).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub rate: Decimal,
    pub formatted_rate: String,
}

impl ExchangeRate {
    pub fn new(rate: Decimal) -> Self {
        Self {
            rate,
            formatted_rate: format_exchange_rate(rate),
        }
    }

    pub fn undefined() -> Self {
        Self::new(Decimal::ZERO)
    }

    pub fn is_defined(&self) -> bool {
        self.rate > Decimal::ZERO
    }

    /// The rate line shown under the form, e.g. `1 BTC = 20.0000 ETH`.
    pub fn describe(&self, from: &Token, to: &Token) -> Option<String> {
        if !self.is_defined() {
            return None;
        }
        Some(format!(
            "1 {} = {} {}",
            from.symbol, self.formatted_rate, to.symbol
        ))
    }
}

/// `price(from) / price(to)`, or zero when either price is missing or the
/// quotient cannot be represented.
pub fn calculate_exchange_rate(from: &Token, to: &Token, prices: &PriceData) -> Decimal {
    let (Some(from_price), Some(to_price)) =
        (prices.find_price(&from.symbol), prices.find_price(&to.symbol))
    else {
        return Decimal::ZERO;
    };

    if to_price.is_zero() {
        return Decimal::ZERO;
    }

    from_price.checked_div(to_price).unwrap_or(Decimal::ZERO)
}

/// Display format whose precision scales with magnitude.
///
/// | rate | format |
/// |------|--------|
/// | 0 | `0` |
/// | < 0.0001 | exponential, 2 fraction digits (`1.23e-5`) |
/// | < 1 | 6 decimals |
/// | < 1000 | 4 decimals |
/// | otherwise | 2 decimals |
///
/// The tier is chosen on the rounded value, so a rate that rounds up to the
/// next threshold is shown in the next tier (`0.99999995` -> `1.0000`).
pub fn format_exchange_rate(rate: Decimal) -> String {
    if rate.is_zero() {
        return "0".to_string();
    }
    if rate < EXPONENTIAL_THRESHOLD {
        if let Some(value) = rate.to_f64() {
            let exponential = format!("{:.2e}", value);
            if parse_rate(&exponential).is_some_and(|shown| shown < EXPONENTIAL_THRESHOLD) {
                return exponential;
            }
        }
    }
    if rate < Decimal::ONE && round(rate, 6) < Decimal::ONE {
        return fixed(rate, 6);
    }
    if rate < LARGE_RATE_THRESHOLD && round(rate, 4) < LARGE_RATE_THRESHOLD {
        return fixed(rate, 4);
    }
    fixed(rate, 2)
}

/// Parses a rate in either plain (`20.0000`) or exponential (`1.23e-5`) form.
pub fn parse_rate(input: &str) -> Option<Decimal> {
    let input = input.trim();
    if input.contains(['e', 'E']) {
        Decimal::from_scientific(input).ok()
    } else {
        Decimal::from_str(input).ok()
    }
}

fn round(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

fn fixed(value: Decimal, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, round(value, decimals))
}
