//! JSON price feed client.
//!
//! The feed is a single unauthenticated GET returning an array of
//! `{ "currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.93 }`
//! records. The same currency may appear several times with different dates.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::PricePoint;
use crate::provider::PriceSource;

/// Default feed location.
pub const DEFAULT_PRICES_URL: &str = "https://interview.switcheo.com/prices.json";

const SOURCE_ID: &str = "PRICE_FEED";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One record of the feed, as sent on the wire.
#[derive(Debug, Deserialize)]
struct PriceRecord {
    currency: String,
    date: String,
    price: f64,
}

/// HTTP price source reading the JSON price feed.
///
/// # Example
///
/// ```ignore
/// use tokenswap_market_data::HttpPriceSource;
///
/// let source = HttpPriceSource::new("https://interview.switcheo.com/prices.json");
/// let points = source.fetch_price_points().await?;
/// ```
pub struct HttpPriceSource {
    client: Client,
    url: String,
}

impl HttpPriceSource {
    /// Create a source for the given feed URL with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, REQUEST_TIMEOUT)
    }

    /// Create a source for the given feed URL with a custom request timeout.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpPriceSource {
    fn default() -> Self {
        Self::new(DEFAULT_PRICES_URL)
    }
}

/// Decode a feed body into price points.
///
/// Records with an unparseable date or a non-finite price are skipped with a
/// warning; a body that is not a JSON array of records is an error.
pub fn parse_price_records(body: &str) -> Result<Vec<PricePoint>, MarketDataError> {
    let records: Vec<PriceRecord> =
        serde_json::from_str(body).map_err(|e| MarketDataError::InvalidResponse {
            provider: SOURCE_ID.to_string(),
            message: e.to_string(),
        })?;

    let mut points = Vec::with_capacity(records.len());
    for record in records {
        let date = match DateTime::parse_from_rfc3339(&record.date) {
            Ok(date) => date.with_timezone(&Utc),
            Err(e) => {
                warn!(
                    "Skipping {} price point with invalid date '{}': {}",
                    record.currency, record.date, e
                );
                continue;
            }
        };

        let price = match Decimal::try_from(record.price) {
            Ok(price) => price,
            Err(_) => {
                warn!(
                    "Skipping {} price point with unrepresentable price {}",
                    record.currency, record.price
                );
                continue;
            }
        };

        points.push(PricePoint::new(record.currency, date, price));
    }

    Ok(points)
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_price_points(&self) -> Result<Vec<PricePoint>, MarketDataError> {
        debug!("Fetching prices from {}", self.url);

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: SOURCE_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: SOURCE_ID.to_string(),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: SOURCE_ID.to_string(),
                message: format!("Failed to fetch prices: HTTP {}", status),
            });
        }

        let body = response.text().await.map_err(MarketDataError::Network)?;

        let points = parse_price_records(&body)?;
        debug!("Price feed returned {} points", points.len());
        Ok(points)
    }
}
