use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokenswap_market_data::PricePoint;

/// Latest positive unit price per currency.
///
/// Keys keep the casing the source used. Non-positive prices are never
/// stored, so every value in the map is strictly greater than zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceData {
    prices: BTreeMap<String, Decimal>,
}

impl PriceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapses raw price points into one price per currency.
    ///
    /// Only points with a positive price are considered. Among those, the one
    /// with the most recent date wins; on identical dates the point that comes
    /// later in `points` wins. A currency with no positive point is absent.
    pub fn from_points(points: &[PricePoint]) -> Self {
        let mut latest: HashMap<&str, (DateTime<Utc>, Decimal)> = HashMap::new();

        for point in points.iter().filter(|p| p.is_priced()) {
            match latest.entry(point.currency.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert((point.date, point.price));
                }
                Entry::Occupied(mut slot) => {
                    if point.date >= slot.get().0 {
                        slot.insert((point.date, point.price));
                    }
                }
            }
        }

        let prices = latest
            .into_iter()
            .map(|(currency, (_, price))| (currency.to_string(), price))
            .collect();

        Self { prices }
    }

    /// Stores a price if it is positive. Returns whether it was stored.
    pub fn insert(&mut self, currency: impl Into<String>, price: Decimal) -> bool {
        if price <= Decimal::ZERO {
            return false;
        }
        self.prices.insert(currency.into(), price);
        true
    }

    /// Exact-key lookup.
    pub fn get(&self, currency: &str) -> Option<Decimal> {
        self.prices.get(currency).copied()
    }

    /// Lookup tolerant of casing differences between a token symbol and the
    /// raw price keys.
    ///
    /// Tries, in order: the exact symbol, its upper-case form, its lower-case
    /// form, then a case-insensitive scan. The first hit wins.
    pub fn find_price(&self, symbol: &str) -> Option<Decimal> {
        self.get(symbol)
            .or_else(|| self.get(&symbol.to_uppercase()))
            .or_else(|| self.get(&symbol.to_lowercase()))
            .or_else(|| {
                let upper = symbol.to_uppercase();
                self.prices
                    .iter()
                    .find(|(key, _)| key.to_uppercase() == upper)
                    .map(|(_, price)| *price)
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.prices.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for PriceData {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        let mut data = PriceData::new();
        for (currency, price) in iter {
            data.insert(currency, price);
        }
        data
    }
}
