use std::time::Duration;

/// Base location of the token icon set
pub const ICON_BASE_URL: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// Symbol whose icon stands in for any token without one
pub const FALLBACK_ICON_SYMBOL: &str = "SWTH";

/// Processing delay of the simulated swap executor
pub const SIMULATED_SWAP_DELAY: Duration = Duration::from_millis(2500);

/// Decimal places kept when deriving one amount from the other
pub const DERIVED_AMOUNT_DECIMALS: u32 = 8;

/// Decimal precision for wallet balance display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Priority assigned to any blockchain outside the known set
pub const UNKNOWN_CHAIN_PRIORITY: i32 = -99;

/// Message shown when the swap executor fails
pub const SWAP_FAILED_MESSAGE: &str = "Swap failed. Please try again.";

/// Message shown when the price catalog cannot be loaded
pub const PRICES_UNAVAILABLE_MESSAGE: &str = "Failed to load token prices. Please refresh the page.";
