use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_CHAIN_PRIORITY;

/// Chain a balance is held on.
///
/// Serialized as its plain name. Names outside the known set are kept
/// verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Blockchain {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
    Other(String),
}

impl Blockchain {
    pub fn as_str(&self) -> &str {
        match self {
            Blockchain::Osmosis => "Osmosis",
            Blockchain::Ethereum => "Ethereum",
            Blockchain::Arbitrum => "Arbitrum",
            Blockchain::Zilliqa => "Zilliqa",
            Blockchain::Neo => "Neo",
            Blockchain::Other(name) => name,
        }
    }

    /// Display priority; higher sorts first.
    pub fn priority(&self) -> i32 {
        match self {
            Blockchain::Osmosis => 100,
            Blockchain::Ethereum => 50,
            Blockchain::Arbitrum => 30,
            Blockchain::Zilliqa | Blockchain::Neo => 20,
            Blockchain::Other(_) => UNKNOWN_CHAIN_PRIORITY,
        }
    }
}

impl From<&str> for Blockchain {
    fn from(name: &str) -> Self {
        match name {
            "Osmosis" => Blockchain::Osmosis,
            "Ethereum" => Blockchain::Ethereum,
            "Arbitrum" => Blockchain::Arbitrum,
            "Zilliqa" => Blockchain::Zilliqa,
            "Neo" => Blockchain::Neo,
            other => Blockchain::Other(other.to_string()),
        }
    }
}

impl From<String> for Blockchain {
    fn from(name: String) -> Self {
        Blockchain::from(name.as_str())
    }
}

impl From<Blockchain> for String {
    fn from(chain: Blockchain) -> Self {
        chain.as_str().to_string()
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority of a chain given by name.
pub fn get_priority(blockchain: &str) -> i32 {
    Blockchain::from(blockchain).priority()
}

/// A raw balance as reported by the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub currency: String,
    pub amount: Decimal,
    pub blockchain: Blockchain,
}

impl WalletBalance {
    pub fn new(currency: impl Into<String>, amount: Decimal, blockchain: impl Into<Blockchain>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            blockchain: blockchain.into(),
        }
    }
}

/// A balance ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRow {
    /// `{currency}-{blockchain}`
    pub key: String,
    pub currency: String,
    pub blockchain: Blockchain,
    pub amount: Decimal,
    pub priority: i32,
    pub formatted: String,
    /// `None` when the currency has no known price.
    pub usd_value: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_priorities() {
        assert_eq!(get_priority("Osmosis"), 100);
        assert_eq!(get_priority("Ethereum"), 50);
        assert_eq!(get_priority("Arbitrum"), 30);
        assert_eq!(get_priority("Zilliqa"), 20);
        assert_eq!(get_priority("Neo"), 20);
        assert_eq!(get_priority("Solana"), UNKNOWN_CHAIN_PRIORITY);
        assert_eq!(get_priority(""), UNKNOWN_CHAIN_PRIORITY);
    }

    #[test]
    fn test_blockchain_serializes_as_name() {
        let balance = WalletBalance::new("OSMO", dec!(1.5), "Osmosis");
        let json = serde_json::to_value(&balance).unwrap();
        assert_eq!(json["blockchain"], "Osmosis");

        let parsed: WalletBalance =
            serde_json::from_str(r#"{"currency":"SOL","amount":"2","blockchain":"Solana"}"#)
                .unwrap();
        assert_eq!(parsed.blockchain, Blockchain::Other("Solana".to_string()));
        assert_eq!(parsed.blockchain.to_string(), "Solana");
    }
}
