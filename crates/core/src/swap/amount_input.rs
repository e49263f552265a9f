use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DERIVED_AMOUNT_DECIMALS;

/// Digits with at most one decimal point, either side optional.
static AMOUNT_INPUT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d*$").expect("Invalid regex pattern"));

/// Whether `input` may be typed into an amount field.
///
/// The empty string and a lone `"."` are valid in-progress input.
pub fn is_valid_amount_input(input: &str) -> bool {
    input.is_empty() || input == "." || AMOUNT_INPUT_REGEX.is_match(input)
}

/// Numeric value of accepted amount input.
///
/// In-progress forms (`""`, `"."`, `"5."`, `".5"`) are read as numbers, the
/// first two as zero. Returns `None` only when the digits do not fit a
/// `Decimal`.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim_end_matches('.');
    if trimmed.is_empty() {
        return Some(Decimal::ZERO);
    }
    if trimmed.starts_with('.') {
        return Decimal::from_str(&format!("0{}", trimmed)).ok();
    }
    Decimal::from_str(trimmed).ok()
}

/// Renders a derived amount: rounded to 8 decimals, trailing zeros and a
/// trailing bare decimal point stripped (`20.00000000` -> `20`).
pub fn format_derived_amount(amount: Decimal) -> String {
    amount
        .round_dp_with_strategy(DERIVED_AMOUNT_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}
