use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use super::swap_errors::SwapError;
use super::swap_model::{SwapOrder, SwapReceipt};
use crate::constants::SIMULATED_SWAP_DELAY;

/// Carries out a validated swap.
#[async_trait]
pub trait SwapExecutor: Send + Sync {
    async fn execute(&self, order: &SwapOrder) -> Result<SwapReceipt, SwapError>;
}

/// Executor that waits a fixed delay and then reports success.
///
/// Stands in for a real settlement backend; it never fails.
#[derive(Debug, Clone)]
pub struct SimulatedSwapExecutor {
    delay: Duration,
}

impl SimulatedSwapExecutor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSwapExecutor {
    fn default() -> Self {
        Self::new(SIMULATED_SWAP_DELAY)
    }
}

#[async_trait]
impl SwapExecutor for SimulatedSwapExecutor {
    async fn execute(&self, order: &SwapOrder) -> Result<SwapReceipt, SwapError> {
        tokio::time::sleep(self.delay).await;
        Ok(SwapReceipt {
            order: order.clone(),
            completed_at: Utc::now(),
        })
    }
}
