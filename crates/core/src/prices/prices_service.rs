use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared};
use tokenswap_market_data::PriceSource;

use super::prices_model::PriceData;
use super::prices_traits::PriceServiceTrait;
use crate::errors::{Error, Result};
use crate::fx::{calculate_exchange_rate, ExchangeRate};
use crate::tokens::{tokens_with_prices, Token};

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<PriceData>>>>;

enum CacheState {
    Empty,
    Loading { generation: u64, fetch: SharedFetch },
    Ready(Arc<PriceData>),
}

struct PriceCache {
    state: CacheState,
    /// Bumped for every fetch started and every invalidation, so a fetch
    /// that settles late can tell whether it is still the current one.
    generation: u64,
}

/// Application-lifetime owner of the price cache.
///
/// Prices are fetched from the source on first use and kept until
/// [`invalidate`](PriceServiceTrait::invalidate) is called. The mutex only
/// guards the cache bookkeeping and is never held across an `.await`.
#[derive(Clone)]
pub struct PriceService {
    source: Arc<dyn PriceSource>,
    cache: Arc<Mutex<PriceCache>>,
}

impl PriceService {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self {
            source,
            cache: Arc::new(Mutex::new(PriceCache {
                state: CacheState::Empty,
                generation: 0,
            })),
        }
    }

    fn lock_cache(&self) -> Result<MutexGuard<'_, PriceCache>> {
        self.cache.lock().map_err(|e| Error::Cache(e.to_string()))
    }

    fn start_fetch(source: Arc<dyn PriceSource>) -> SharedFetch {
        async move {
            log::debug!("Fetching prices from {}", source.id());
            let points = source.fetch_price_points().await.map_err(|e| {
                log::error!("Failed to fetch prices from {}: {}", source.id(), e);
                Error::from(e)
            })?;

            let prices = PriceData::from_points(&points);
            log::info!(
                "Loaded {} prices from {} price points ({})",
                prices.len(),
                points.len(),
                source.id()
            );
            Ok(Arc::new(prices))
        }
        .boxed()
        .shared()
    }

    /// Records the outcome of the fetch started under `generation`.
    ///
    /// Every waiter calls this; only the first one for the current generation
    /// changes anything. Success fills the cache, failure clears the in-flight
    /// marker so the next call starts a fresh attempt.
    fn settle(&self, generation: u64, outcome: &Result<Arc<PriceData>>) {
        let Ok(mut cache) = self.cache.lock() else {
            return;
        };

        let is_current = matches!(
            &cache.state,
            CacheState::Loading { generation: g, .. } if *g == generation
        );
        if !is_current {
            return;
        }

        cache.state = match outcome {
            Ok(prices) => CacheState::Ready(prices.clone()),
            Err(_) => CacheState::Empty,
        };
    }
}

#[async_trait]
impl PriceServiceTrait for PriceService {
    async fn fetch_prices(&self) -> Result<Arc<PriceData>> {
        let (generation, fetch) = {
            let mut cache = self.lock_cache()?;
            let pending = match &cache.state {
                CacheState::Ready(prices) => return Ok(prices.clone()),
                CacheState::Loading { generation, fetch } => Some((*generation, fetch.clone())),
                CacheState::Empty => None,
            };

            match pending {
                Some(pending) => pending,
                None => {
                    cache.generation += 1;
                    let generation = cache.generation;
                    let fetch = Self::start_fetch(self.source.clone());
                    cache.state = CacheState::Loading {
                        generation,
                        fetch: fetch.clone(),
                    };
                    (generation, fetch)
                }
            }
        };

        let outcome = fetch.await;
        self.settle(generation, &outcome);
        outcome
    }

    fn cached_prices(&self) -> Option<Arc<PriceData>> {
        let cache = self.cache.lock().ok()?;
        match &cache.state {
            CacheState::Ready(prices) => Some(prices.clone()),
            _ => None,
        }
    }

    fn invalidate(&self) {
        match self.cache.lock() {
            Ok(mut cache) => {
                cache.generation += 1;
                cache.state = CacheState::Empty;
                log::debug!("Price cache invalidated");
            }
            Err(e) => log::warn!("Could not invalidate price cache: {}", e),
        }
    }

    async fn get_tokens(&self) -> Result<Vec<Token>> {
        let prices = self.fetch_prices().await?;
        Ok(tokens_with_prices(&prices))
    }

    async fn get_exchange_rate(&self, from_symbol: &str, to_symbol: &str) -> Result<ExchangeRate> {
        let prices = self.fetch_prices().await?;
        let rate = calculate_exchange_rate(&Token::new(from_symbol), &Token::new(to_symbol), &prices);
        Ok(ExchangeRate::new(rate))
    }
}
