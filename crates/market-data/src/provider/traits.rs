//! Price source trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PricePoint;

/// Trait for price sources.
///
/// Implement this trait to plug a new price backend into the price service.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tokenswap_market_data::{MarketDataError, PricePoint, PriceSource};
///
/// struct MySource;
///
/// #[async_trait]
/// impl PriceSource for MySource {
///     fn id(&self) -> &'static str {
///         "MY_SOURCE"
///     }
///
///     async fn fetch_price_points(&self) -> Result<Vec<PricePoint>, MarketDataError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Unique identifier for this source.
    ///
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch every price point the source currently publishes.
    ///
    /// Points are returned in source order, unfiltered: duplicates per
    /// currency and non-positive prices are left for the caller to resolve.
    async fn fetch_price_points(&self) -> Result<Vec<PricePoint>, MarketDataError>;
}
