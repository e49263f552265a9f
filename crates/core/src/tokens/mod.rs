//! Tokens module - token identity, catalog derivation, and icon URLs.

mod token_icons;
mod tokens_model;

pub use token_icons::TokenIconResolver;
pub use tokens_model::{default_pair, selectable_tokens, tokens_with_prices, Token};
