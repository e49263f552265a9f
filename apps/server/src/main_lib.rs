use std::sync::Arc;

use crate::config::Config;
use tokenswap_core::{
    prices::{PriceService, PriceServiceTrait},
    swap::{SimulatedSwapExecutor, SwapExecutor},
    tokens::TokenIconResolver,
};
use tokenswap_market_data::{HttpPriceSource, PriceSource};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub price_service: Arc<dyn PriceServiceTrait>,
    pub icon_resolver: Arc<TokenIconResolver>,
    pub swap_executor: Arc<dyn SwapExecutor>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let source = HttpPriceSource::with_timeout(config.prices_url.clone(), config.request_timeout);
    tracing::info!("Price feed in use: {}", source.url());
    Ok(build_state_with_source(config, Arc::new(source)))
}

/// State over an arbitrary price source, e.g. a fixed one when offline.
pub fn build_state_with_source(config: &Config, source: Arc<dyn PriceSource>) -> Arc<AppState> {
    let price_service: Arc<dyn PriceServiceTrait> = Arc::new(PriceService::new(source));
    let icon_resolver = Arc::new(TokenIconResolver::new(config.icon_base_url.clone()));
    let swap_executor: Arc<dyn SwapExecutor> =
        Arc::new(SimulatedSwapExecutor::new(config.submit_delay));

    Arc::new(AppState {
        price_service,
        icon_resolver,
        swap_executor,
    })
}
