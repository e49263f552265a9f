//! FX module - cross rates between tokens and their display format.

mod exchange_rate;

pub use exchange_rate::{calculate_exchange_rate, format_exchange_rate, parse_rate, ExchangeRate};
