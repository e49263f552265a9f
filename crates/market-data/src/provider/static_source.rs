//! Fixed, in-memory price source.
//!
//! Serves a predetermined list of price points. Used when the application
//! runs without network access and as a building block in tests.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PricePoint;
use crate::provider::PriceSource;

const SOURCE_ID: &str = "STATIC";

#[derive(Clone, Debug, Default)]
pub struct StaticPriceSource {
    points: Vec<PricePoint>,
}

impl StaticPriceSource {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_price_points(&self) -> Result<Vec<PricePoint>, MarketDataError> {
        Ok(self.points.clone())
    }
}
