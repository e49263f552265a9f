//! Tokenswap Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic behind the token swap form and the
//! wallet balance listing. It is rendering-agnostic: every piece of state the
//! form needs is a plain value driven by explicit transitions.

pub mod constants;
pub mod errors;
pub mod fx;
pub mod prices;
pub mod summation;
pub mod swap;
pub mod tokens;
pub mod wallet;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
