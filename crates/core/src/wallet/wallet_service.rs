use rust_decimal::{Decimal, RoundingStrategy};

use super::wallet_model::{WalletBalance, WalletRow};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, UNKNOWN_CHAIN_PRIORITY};
use crate::prices::PriceData;

/// Amount with exactly two decimals, e.g. `1.5` -> `1.50`.
pub fn format_balance_amount(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", DISPLAY_DECIMAL_PRECISION as usize, rounded)
}

/// Turns raw balances into display rows.
///
/// Balances on unknown chains and non-positive amounts are dropped. The rest
/// are sorted by chain priority, highest first, keeping input order among
/// equal priorities.
pub fn prepare_wallet_rows(balances: &[WalletBalance], prices: &PriceData) -> Vec<WalletRow> {
    let mut rows: Vec<WalletRow> = balances
        .iter()
        .filter_map(|balance| {
            let priority = balance.blockchain.priority();
            if priority <= UNKNOWN_CHAIN_PRIORITY || balance.amount <= Decimal::ZERO {
                return None;
            }

            let usd_value = prices
                .get(&balance.currency)
                .and_then(|price| price.checked_mul(balance.amount));
            if usd_value.is_none() {
                log::debug!("No USD value for {} on {}", balance.currency, balance.blockchain);
            }

            Some(WalletRow {
                key: format!("{}-{}", balance.currency, balance.blockchain),
                currency: balance.currency.clone(),
                blockchain: balance.blockchain.clone(),
                amount: balance.amount,
                priority,
                formatted: format_balance_amount(balance.amount),
                usd_value,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.priority.cmp(&a.priority));
    rows
}

/// Everything the wallet page consumes: balances, prices, and how to render
/// one row.
pub struct WalletPage<'a, F>
where
    F: Fn(&WalletRow) -> String,
{
    pub balances: &'a [WalletBalance],
    pub prices: &'a PriceData,
    pub render_row: F,
}

impl<'a, F> WalletPage<'a, F>
where
    F: Fn(&WalletRow) -> String,
{
    pub fn new(balances: &'a [WalletBalance], prices: &'a PriceData, render_row: F) -> Self {
        Self {
            balances,
            prices,
            render_row,
        }
    }

    pub fn rows(&self) -> Vec<WalletRow> {
        prepare_wallet_rows(self.balances, self.prices)
    }

    /// Rendered rows in display order.
    pub fn render(&self) -> Vec<String> {
        self.rows().iter().map(|row| (self.render_row)(row)).collect()
    }
}
