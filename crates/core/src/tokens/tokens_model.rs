use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::prices::PriceData;

/// A swappable token.
///
/// Identity is the upper-cased symbol: `Token::new("eth") == Token::new("ETH")`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TokenRecord")]
pub struct Token {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Token {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            name: None,
        }
    }

    pub fn with_name(symbol: &str, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.to_uppercase(),
            name: Some(name.into()),
        }
    }

    /// Identity key (upper-cased symbol).
    pub fn key(&self) -> String {
        self.symbol.to_uppercase()
    }
}

/// Wire shape of a token; the symbol is normalized on the way in.
#[derive(Deserialize)]
struct TokenRecord {
    symbol: String,
    #[serde(default)]
    name: Option<String>,
}

impl From<TokenRecord> for Token {
    fn from(record: TokenRecord) -> Self {
        Self {
            symbol: record.symbol.to_uppercase(),
            name: record.name,
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.symbol.eq_ignore_ascii_case(&other.symbol)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// One token per priced currency, sorted by symbol, without duplicates.
///
/// The symbol is upper-cased and the original price key is kept as the
/// name. When two keys differ only by case, the one that sorts first by
/// original key survives.
pub fn tokens_with_prices(prices: &PriceData) -> Vec<Token> {
    let mut tokens: Vec<Token> = prices
        .iter()
        .filter(|(_, price)| *price > Decimal::ZERO)
        .map(|(currency, _)| Token::with_name(currency, currency))
        .collect();

    tokens.sort_by(|a, b| a.symbol.cmp(&b.symbol).then_with(|| a.name.cmp(&b.name)));
    tokens.dedup_by(|later, earlier| later.symbol == earlier.symbol);
    tokens
}

/// Tokens offered in one picker: everything except the token chosen in the
/// other picker.
pub fn selectable_tokens(tokens: &[Token], exclude: Option<&Token>) -> Vec<Token> {
    tokens
        .iter()
        .filter(|token| Some(*token) != exclude)
        .cloned()
        .collect()
}

/// Initial (source, destination) selection: the first two catalog entries.
pub fn default_pair(tokens: &[Token]) -> Option<(Token, Token)> {
    match tokens {
        [first, second, ..] => Some((first.clone(), second.clone())),
        _ => None,
    }
}
