//! Wallet module - balance prioritization, filtering and display rows.

mod wallet_model;
mod wallet_service;

pub use wallet_model::{get_priority, Blockchain, WalletBalance, WalletRow};
pub use wallet_service::{format_balance_amount, prepare_wallet_rows, WalletPage};
