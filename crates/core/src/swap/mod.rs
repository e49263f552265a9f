//! Swap module - the two-sided amount form as an explicit state machine,
//! its validation, and submission.

mod amount_input;
mod swap_errors;
mod swap_executor;
mod swap_form;
mod swap_model;

#[cfg(test)]
mod swap_form_tests;

pub use amount_input::{format_derived_amount, is_valid_amount_input, parse_amount};
pub use swap_errors::{SwapError, SwapValidationError};
pub use swap_executor::{SimulatedSwapExecutor, SwapExecutor};
pub use swap_form::{transition, validate, SwapForm};
pub use swap_model::{Focus, SubmissionStatus, SwapEvent, SwapFormState, SwapOrder, SwapReceipt};
