//! Prices module - price aggregation, the coalescing price cache, and traits.

mod prices_model;
mod prices_service;
mod prices_traits;


pub use prices_model::PriceData;
pub use prices_service::PriceService;
pub use prices_traits::PriceServiceTrait;
