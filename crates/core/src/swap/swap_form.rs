//! The swap form state machine.
//!
//! `transition` is pure: given a state, an event and the current prices it
//! returns the next state. After every accepted event the non-focused amount
//! is re-derived from the focused one, so the focused field is never
//! overwritten by the derivation.

use std::mem;
use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use super::amount_input::{format_derived_amount, is_valid_amount_input, parse_amount};
use super::swap_errors::{SwapError, SwapValidationError};
use super::swap_executor::SwapExecutor;
use super::swap_model::{Focus, SubmissionStatus, SwapEvent, SwapFormState, SwapOrder, SwapReceipt};
use crate::constants::SWAP_FAILED_MESSAGE;
use crate::fx::{calculate_exchange_rate, ExchangeRate};
use crate::prices::PriceData;
use crate::tokens::{default_pair, tokens_with_prices};

impl SwapFormState {
    /// Fresh form with the first two catalog tokens preselected.
    pub fn initial(prices: &PriceData) -> Self {
        let mut state = SwapFormState::default();
        if let Some((source, destination)) = default_pair(&tokens_with_prices(prices)) {
            state.source_token = Some(source);
            state.destination_token = Some(destination);
        }
        state
    }

    /// Current rate. Zero means undefined, which includes picking the same
    /// token on both sides.
    pub fn exchange_rate(&self, prices: &PriceData) -> Decimal {
        match (&self.source_token, &self.destination_token) {
            (Some(source), Some(destination)) if source != destination => {
                calculate_exchange_rate(source, destination, prices)
            }
            _ => Decimal::ZERO,
        }
    }
}

/// Applies one event. Rejected amount input leaves the state untouched and
/// returns `SwapError::InvalidAmountInput`.
pub fn transition(
    state: &SwapFormState,
    event: SwapEvent,
    prices: &PriceData,
) -> Result<SwapFormState, SwapError> {
    let mut next = state.clone();

    match event {
        SwapEvent::SelectSource(token) => next.source_token = Some(token),
        SwapEvent::SelectDestination(token) => next.destination_token = Some(token),
        SwapEvent::Focus(focus) => next.focus = focus,
        SwapEvent::EditSource(input) => {
            if !is_valid_amount_input(&input) {
                return Err(SwapError::InvalidAmountInput(input));
            }
            next.source_amount = input;
            next.focus = Focus::Source;
        }
        SwapEvent::EditDestination(input) => {
            if !is_valid_amount_input(&input) {
                return Err(SwapError::InvalidAmountInput(input));
            }
            next.destination_amount = input;
            next.focus = Focus::Destination;
        }
        SwapEvent::SwapDirection => {
            mem::swap(&mut next.source_token, &mut next.destination_token);
            mem::swap(&mut next.source_amount, &mut next.destination_amount);
        }
        SwapEvent::ClearError => next.error = None,
    }

    let rate = next.exchange_rate(prices);
    Ok(synchronize(next, rate))
}

/// Re-derives the field that is not in focus.
///
/// An empty destination field never drives the source: clearing it or just
/// focusing it leaves the source amount as typed.
fn synchronize(mut state: SwapFormState, rate: Decimal) -> SwapFormState {
    if rate.is_zero() {
        match state.focus {
            // Keep whatever the destination shows while the operator is still
            // typing a source amount and the rate is unresolved.
            Focus::Source if !state.source_amount.is_empty() => {}
            _ => state.destination_amount.clear(),
        }
        return state;
    }

    match state.focus {
        Focus::Source => {
            state.destination_amount = derive(&state.source_amount, |a| a.checked_mul(rate));
        }
        Focus::Destination if !state.destination_amount.is_empty() => {
            state.source_amount = derive(&state.destination_amount, |a| a.checked_div(rate));
        }
        Focus::Destination | Focus::None => {}
    }
    state
}

fn derive(input: &str, convert: impl Fn(Decimal) -> Option<Decimal>) -> String {
    parse_amount(input)
        .filter(|amount| *amount > Decimal::ZERO)
        .and_then(convert)
        .map(format_derived_amount)
        .unwrap_or_default()
}

/// Checks that the form can be submitted and builds the order.
pub fn validate(state: &SwapFormState, prices: &PriceData) -> Result<SwapOrder, SwapValidationError> {
    let (Some(source), Some(destination)) = (&state.source_token, &state.destination_token) else {
        return Err(SwapValidationError::MissingToken);
    };
    if source == destination {
        return Err(SwapValidationError::SameToken);
    }

    let source_amount = parse_amount(&state.source_amount)
        .filter(|amount| *amount > Decimal::ZERO)
        .ok_or(SwapValidationError::InvalidAmount)?;

    let rate = state.exchange_rate(prices);
    if rate.is_zero() {
        return Err(SwapValidationError::RateUnavailable);
    }
    let destination_amount = source_amount
        .checked_mul(rate)
        .ok_or(SwapValidationError::RateUnavailable)?;

    Ok(SwapOrder {
        id: Uuid::new_v4(),
        source_token: source.clone(),
        destination_token: destination.clone(),
        source_amount,
        destination_amount,
        rate,
    })
}

/// Owned swap form: state plus the prices it is evaluated against.
///
/// Events are applied in call order through `&mut self`.
#[derive(Debug, Clone)]
pub struct SwapForm {
    state: SwapFormState,
    prices: Arc<PriceData>,
}

impl SwapForm {
    pub fn new(prices: Arc<PriceData>) -> Self {
        Self {
            state: SwapFormState::initial(&prices),
            prices,
        }
    }

    /// Resumes a form from a previously produced state.
    pub fn with_state(state: SwapFormState, prices: Arc<PriceData>) -> Self {
        Self { state, prices }
    }

    pub fn state(&self) -> &SwapFormState {
        &self.state
    }

    pub fn into_state(self) -> SwapFormState {
        self.state
    }

    pub fn prices(&self) -> &PriceData {
        &self.prices
    }

    pub fn exchange_rate(&self) -> ExchangeRate {
        ExchangeRate::new(self.state.exchange_rate(&self.prices))
    }

    /// The `1 X = r Y` line, when both tokens and the rate are known.
    pub fn rate_description(&self) -> Option<String> {
        let (source, destination) = (
            self.state.source_token.as_ref()?,
            self.state.destination_token.as_ref()?,
        );
        self.exchange_rate().describe(source, destination)
    }

    /// Swaps in a fresh price catalog. Seeds the default pair when nothing
    /// is selected yet and re-derives the unfocused amount.
    pub fn load_prices(&mut self, prices: Arc<PriceData>) {
        self.prices = prices;
        if self.state.source_token.is_none() && self.state.destination_token.is_none() {
            if let Some((source, destination)) = default_pair(&tokens_with_prices(&self.prices)) {
                self.state.source_token = Some(source);
                self.state.destination_token = Some(destination);
            }
        }
        let rate = self.state.exchange_rate(&self.prices);
        self.state = synchronize(mem::take(&mut self.state), rate);
    }

    pub fn dispatch(&mut self, event: SwapEvent) -> Result<&SwapFormState, SwapError> {
        self.state = transition(&self.state, event, &self.prices)?;
        Ok(&self.state)
    }

    pub fn validate(&self) -> Result<SwapOrder, SwapValidationError> {
        validate(&self.state, &self.prices)
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validates, executes and records the outcome on the form.
    ///
    /// On success both amounts are cleared. On executor failure a generic
    /// message is shown and the amounts are kept for a retry.
    pub async fn submit(&mut self, executor: &dyn SwapExecutor) -> Result<SwapReceipt, SwapError> {
        if self.state.status == SubmissionStatus::Submitting {
            return Err(SwapError::AlreadySubmitting);
        }

        let order = match self.validate() {
            Ok(order) => order,
            Err(e) => {
                self.state.error = Some(e.to_string());
                return Err(e.into());
            }
        };

        let submission = Submission::start(&mut self.state);
        log::debug!(
            "Submitting swap {}: {} {} -> {}",
            order.id,
            order.source_amount,
            order.source_token.symbol,
            order.destination_token.symbol
        );

        match executor.execute(&order).await {
            Ok(receipt) => {
                log::info!("Swap {} completed", order.id);
                submission.succeed(receipt.message());
                Ok(receipt)
            }
            Err(e) => {
                log::error!("Swap {} failed: {}", order.id, e);
                submission.fail();
                Err(e)
            }
        }
    }
}

/// In-flight submission on a form.
///
/// Dropping it before an outcome is recorded (the submit future was
/// cancelled) puts the form back to `Idle` so it can be submitted again.
struct Submission<'a> {
    state: &'a mut SwapFormState,
}

impl<'a> Submission<'a> {
    fn start(state: &'a mut SwapFormState) -> Self {
        state.status = SubmissionStatus::Submitting;
        state.error = None;
        Self { state }
    }

    fn succeed(self, message: String) {
        self.state.status = SubmissionStatus::Succeeded(message);
        self.state.source_amount.clear();
        self.state.destination_amount.clear();
    }

    fn fail(self) {
        self.state.status = SubmissionStatus::Failed(SWAP_FAILED_MESSAGE.to_string());
        self.state.error = Some(SWAP_FAILED_MESSAGE.to_string());
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        if self.state.status == SubmissionStatus::Submitting {
            log::warn!("Swap submission abandoned before completion");
            self.state.status = SubmissionStatus::Idle;
        }
    }
}
