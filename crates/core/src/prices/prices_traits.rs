use std::sync::Arc;

use async_trait::async_trait;

use super::prices_model::PriceData;
use crate::errors::Result;
use crate::fx::ExchangeRate;
use crate::tokens::Token;

/// Trait defining the contract for price service operations.
#[async_trait]
pub trait PriceServiceTrait: Send + Sync {
    /// Returns the cached prices, fetching them on first use.
    ///
    /// Concurrent callers arriving while a fetch is in flight share that
    /// fetch and all observe its outcome.
    async fn fetch_prices(&self) -> Result<Arc<PriceData>>;

    /// Returns the cached prices without triggering a fetch.
    fn cached_prices(&self) -> Option<Arc<PriceData>>;

    /// Drops the cached prices so the next `fetch_prices` goes to the source.
    fn invalidate(&self);

    /// Token catalog derived from the current prices.
    async fn get_tokens(&self) -> Result<Vec<Token>>;

    /// Cross rate between two symbols under the current prices.
    async fn get_exchange_rate(&self, from_symbol: &str, to_symbol: &str) -> Result<ExchangeRate>;
}
