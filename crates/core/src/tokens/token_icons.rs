use std::time::Duration;

use reqwest::Client;

use super::tokens_model::Token;
use crate::constants::{FALLBACK_ICON_SYMBOL, ICON_BASE_URL};

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds icon URLs from the `<base>/<SYMBOL>.svg` template.
///
/// A missing icon is replaced by the fixed fallback icon once; there is no
/// further retry.
#[derive(Clone)]
pub struct TokenIconResolver {
    base_url: String,
    client: Client,
}

impl TokenIconResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(CHECK_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn icon_url(&self, token: &Token) -> String {
        format!("{}/{}.svg", self.base_url, token.key())
    }

    pub fn fallback_icon_url(&self) -> String {
        format!("{}/{}.svg", self.base_url, FALLBACK_ICON_SYMBOL)
    }

    /// Checks an icon URL with a HEAD request. Any transport error counts as missing.
    pub async fn icon_exists(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::debug!("Icon check failed for {}: {}", url, e);
                false
            }
        }
    }

    /// The token's own icon if it exists, otherwise the fallback icon.
    pub async fn resolve_icon_url(&self, token: &Token) -> String {
        let url = self.icon_url(token);
        if self.icon_exists(&url).await {
            url
        } else {
            self.fallback_icon_url()
        }
    }
}

impl Default for TokenIconResolver {
    fn default() -> Self {
        Self::new(ICON_BASE_URL)
    }
}
