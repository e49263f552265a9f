use thiserror::Error;

/// Reasons a swap cannot be submitted. Shown inline, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapValidationError {
    #[error("Please select both currencies")]
    MissingToken,

    #[error("Please select different currencies")]
    SameToken,

    #[error("Please enter a valid amount to send")]
    InvalidAmount,

    #[error("Unable to calculate exchange rate")]
    RateUnavailable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    /// Rejected at the input boundary: only digits and one decimal point.
    #[error("Invalid amount input: '{0}'")]
    InvalidAmountInput(String),

    #[error("{0}")]
    Validation(#[from] SwapValidationError),

    #[error("A swap is already being submitted")]
    AlreadySubmitting,

    #[error("Swap execution failed: {0}")]
    Execution(String),
}
