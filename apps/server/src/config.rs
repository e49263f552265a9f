use std::{net::SocketAddr, time::Duration};

use tokenswap_core::constants::{ICON_BASE_URL, SIMULATED_SWAP_DELAY};
use tokenswap_market_data::DEFAULT_PRICES_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub prices_url: String,
    pub icon_base_url: String,
    pub submit_delay: Duration,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("TS_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid TS_LISTEN_ADDR");
        let prices_url =
            std::env::var("TS_PRICES_URL").unwrap_or_else(|_| DEFAULT_PRICES_URL.into());
        let icon_base_url =
            std::env::var("TS_ICON_BASE_URL").unwrap_or_else(|_| ICON_BASE_URL.into());
        let submit_delay_ms: u64 = std::env::var("TS_SUBMIT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(SIMULATED_SWAP_DELAY.as_millis() as u64);
        let cors_allow = std::env::var("TS_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("TS_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            prices_url,
            icon_base_url,
            submit_delay: Duration::from_millis(submit_delay_ms),
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
