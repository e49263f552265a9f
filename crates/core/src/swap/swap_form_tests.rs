//! Tests for the swap form state machine.
//!
//! Prices used throughout: BTC 50000, ETH 2500, USDC 1. The default pair is
//! therefore BTC -> ETH at a rate of 20.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use crate::constants::SWAP_FAILED_MESSAGE;
    use crate::prices::PriceData;
    use crate::swap::{
        transition, validate, Focus, SimulatedSwapExecutor, SubmissionStatus, SwapError,
        SwapEvent, SwapExecutor, SwapForm, SwapFormState, SwapOrder, SwapReceipt,
        SwapValidationError,
    };
    use crate::tokens::Token;

    fn prices() -> Arc<PriceData> {
        Arc::new(
            [("BTC", dec!(50000)), ("ETH", dec!(2500)), ("USDC", dec!(1))]
                .into_iter()
                .collect(),
        )
    }

    fn form() -> SwapForm {
        SwapForm::new(prices())
    }

    // =========================================================================
    // Failing executor
    // =========================================================================

    struct FailingExecutor;

    #[async_trait]
    impl SwapExecutor for FailingExecutor {
        async fn execute(&self, _order: &SwapOrder) -> Result<SwapReceipt, SwapError> {
            Err(SwapError::Execution("settlement backend unavailable".to_string()))
        }
    }

    // =========================================================================
    // Initial state
    // =========================================================================

    #[test]
    fn test_new_form_preselects_first_two_tokens() {
        let form = form();
        let state = form.state();
        assert_eq!(state.source_token, Some(Token::new("BTC")));
        assert_eq!(state.destination_token, Some(Token::new("ETH")));
        assert_eq!(state.source_amount, "");
        assert_eq!(state.destination_amount, "");
        assert_eq!(state.focus, Focus::None);
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert_eq!(form.exchange_rate().rate, dec!(20));
        assert_eq!(form.rate_description().as_deref(), Some("1 BTC = 20.0000 ETH"));
    }

    #[test]
    fn test_new_form_with_single_token_has_no_selection() {
        let prices: PriceData = [("BTC", dec!(50000))].into_iter().collect();
        let form = SwapForm::new(Arc::new(prices));
        assert_eq!(form.state().source_token, None);
        assert_eq!(form.state().destination_token, None);
        assert!(!form.exchange_rate().is_defined());
        assert_eq!(form.rate_description(), None);
    }

    #[test]
    fn test_load_prices_seeds_pair_and_resyncs() {
        let mut form = SwapForm::new(Arc::new(PriceData::new()));
        assert_eq!(form.state().source_token, None);

        form.load_prices(prices());
        assert_eq!(form.state().source_token, Some(Token::new("BTC")));
        assert_eq!(form.state().destination_token, Some(Token::new("ETH")));

        form.dispatch(SwapEvent::EditSource("1".to_string())).unwrap();
        let doubled: PriceData = [("BTC", dec!(100000)), ("ETH", dec!(2500))]
            .into_iter()
            .collect();
        form.load_prices(Arc::new(doubled));
        assert_eq!(form.state().source_amount, "1");
        assert_eq!(form.state().destination_amount, "40");
    }

    // =========================================================================
    // Amount synchronization
    // =========================================================================

    #[test]
    fn test_edit_source_derives_destination() {
        let mut form = form();
        let state = form.dispatch(SwapEvent::EditSource("1".to_string())).unwrap();
        assert_eq!(state.focus, Focus::Source);
        assert_eq!(state.source_amount, "1");
        assert_eq!(state.destination_amount, "20");
    }

    #[test]
    fn test_edit_destination_derives_source() {
        let mut form = form();
        let state = form.dispatch(SwapEvent::EditDestination("40".to_string())).unwrap();
        assert_eq!(state.focus, Focus::Destination);
        assert_eq!(state.destination_amount, "40");
        assert_eq!(state.source_amount, "2");
    }

    #[test]
    fn test_focused_field_is_never_rewritten() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("0.50".to_string())).unwrap();
        assert_eq!(form.state().source_amount, "0.50");
        assert_eq!(form.state().destination_amount, "10");

        form.dispatch(SwapEvent::EditSource("12.".to_string())).unwrap();
        assert_eq!(form.state().source_amount, "12.");
        assert_eq!(form.state().destination_amount, "240");
    }

    #[test]
    fn test_zero_or_empty_input_clears_derived_field() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("1".to_string())).unwrap();
        assert_eq!(form.state().destination_amount, "20");

        form.dispatch(SwapEvent::EditSource("".to_string())).unwrap();
        assert_eq!(form.state().destination_amount, "");

        form.dispatch(SwapEvent::EditSource("0".to_string())).unwrap();
        assert_eq!(form.state().destination_amount, "");

        form.dispatch(SwapEvent::EditSource(".".to_string())).unwrap();
        assert_eq!(form.state().destination_amount, "");
    }

    #[test]
    fn test_derived_amount_is_rounded_to_eight_decimals() {
        let mut form = form();
        form.dispatch(SwapEvent::SelectSource(Token::new("USDC"))).unwrap();
        form.dispatch(SwapEvent::SelectDestination(Token::new("BTC"))).unwrap();
        form.dispatch(SwapEvent::EditSource("1".to_string())).unwrap();
        assert_eq!(form.state().destination_amount, "0.00002");

        form.dispatch(SwapEvent::EditSource("0.0001".to_string())).unwrap();
        assert_eq!(form.state().destination_amount, "0");
    }

    #[test]
    fn test_token_change_resyncs_from_focused_field() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("2".to_string())).unwrap();
        assert_eq!(form.state().destination_amount, "40");

        form.dispatch(SwapEvent::SelectDestination(Token::new("USDC"))).unwrap();
        assert_eq!(form.state().source_amount, "2");
        assert_eq!(form.state().destination_amount, "100000");
    }

    #[test]
    fn test_invalid_input_is_rejected_and_state_unchanged() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("1".to_string())).unwrap();
        let before = form.state().clone();

        for input in ["abc", "-1", "1.2.3", "1e5"] {
            let err = form.dispatch(SwapEvent::EditSource(input.to_string())).unwrap_err();
            assert_eq!(err, SwapError::InvalidAmountInput(input.to_string()));
            assert_eq!(form.state(), &before);
        }

        let err = form
            .dispatch(SwapEvent::EditDestination("2,5".to_string()))
            .unwrap_err();
        assert!(matches!(err, SwapError::InvalidAmountInput(_)));
        assert_eq!(form.state(), &before);
    }

    #[test]
    fn test_transition_is_pure() {
        let prices = prices();
        let state = SwapFormState::initial(&prices);
        let next = transition(&state, SwapEvent::EditSource("1".to_string()), &prices).unwrap();

        assert_eq!(state.source_amount, "");
        assert_eq!(next.destination_amount, "20");
    }

    // =========================================================================
    // Undefined rate
    // =========================================================================

    #[test]
    fn test_same_token_clears_derived_field_without_focus() {
        let prices = prices();
        let state = SwapFormState {
            source_token: Some(Token::new("BTC")),
            destination_token: Some(Token::new("ETH")),
            destination_amount: "20".to_string(),
            ..Default::default()
        };

        let next = transition(&state, SwapEvent::SelectDestination(Token::new("btc")), &prices)
            .unwrap();
        assert_eq!(next.destination_amount, "");
        assert_eq!(next.exchange_rate(&prices), dec!(0));
    }

    #[test]
    fn test_unpriced_token_keeps_typed_source() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("1".to_string())).unwrap();
        form.dispatch(SwapEvent::SelectDestination(Token::new("DOGE"))).unwrap();

        assert_eq!(form.state().source_amount, "1");
        assert_eq!(form.state().destination_amount, "20");
        assert!(!form.exchange_rate().is_defined());
    }

    #[test]
    fn test_unpriced_token_clears_destination_when_destination_focused() {
        let mut form = form();
        form.dispatch(SwapEvent::EditDestination("40".to_string())).unwrap();
        assert_eq!(form.state().source_amount, "2");

        form.dispatch(SwapEvent::SelectSource(Token::new("DOGE"))).unwrap();
        assert_eq!(form.state().source_amount, "2");
        assert_eq!(form.state().destination_amount, "");
    }

    #[test]
    fn test_focusing_destination_with_unpriced_token_keeps_source() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("5".to_string())).unwrap();
        form.dispatch(SwapEvent::SelectDestination(Token::new("DOGE"))).unwrap();
        assert_eq!(form.state().source_amount, "5");
        assert_eq!(form.state().destination_amount, "100");

        form.dispatch(SwapEvent::Focus(Focus::Destination)).unwrap();
        assert_eq!(form.state().source_amount, "5");
        assert_eq!(form.state().destination_amount, "");
    }

    #[test]
    fn test_empty_destination_does_not_drive_source() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("5".to_string())).unwrap();
        form.dispatch(SwapEvent::Focus(Focus::Destination)).unwrap();
        assert_eq!(form.state().source_amount, "5");
        assert_eq!(form.state().destination_amount, "100");

        form.dispatch(SwapEvent::EditDestination("".to_string())).unwrap();
        assert_eq!(form.state().source_amount, "5");
        assert_eq!(form.state().destination_amount, "");

        form.dispatch(SwapEvent::SelectSource(Token::new("USDC"))).unwrap();
        assert_eq!(form.state().source_amount, "5");
    }

    // =========================================================================
    // Direction swap
    // =========================================================================

    #[test]
    fn test_swap_direction_exchanges_tokens_and_amounts() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("1".to_string())).unwrap();
        form.dispatch(SwapEvent::SwapDirection).unwrap();

        let state = form.state();
        assert_eq!(state.source_token, Some(Token::new("ETH")));
        assert_eq!(state.destination_token, Some(Token::new("BTC")));
        assert_eq!(state.source_amount, "20");
        assert_eq!(state.destination_amount, "1");
        assert_eq!(form.exchange_rate().rate, dec!(0.05));
    }

    #[test]
    fn test_swap_direction_twice_restores_state() {
        let mut form = form();
        form.dispatch(SwapEvent::EditDestination("10".to_string())).unwrap();
        let before = form.state().clone();

        form.dispatch(SwapEvent::SwapDirection).unwrap();
        form.dispatch(SwapEvent::SwapDirection).unwrap();
        assert_eq!(form.state(), &before);
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn test_validate_missing_token() {
        let state = SwapFormState {
            source_token: Some(Token::new("BTC")),
            source_amount: "1".to_string(),
            ..Default::default()
        };
        let err = validate(&state, &prices()).unwrap_err();
        assert_eq!(err, SwapValidationError::MissingToken);
        assert_eq!(err.to_string(), "Please select both currencies");
    }

    #[test]
    fn test_validate_same_token() {
        let state = SwapFormState {
            source_token: Some(Token::new("ETH")),
            destination_token: Some(Token::new("eth")),
            source_amount: "1".to_string(),
            ..Default::default()
        };
        let err = validate(&state, &prices()).unwrap_err();
        assert_eq!(err.to_string(), "Please select different currencies");
    }

    #[test]
    fn test_validate_amount() {
        let mut form = form();
        assert_eq!(form.validate().unwrap_err(), SwapValidationError::InvalidAmount);

        form.dispatch(SwapEvent::EditSource("0".to_string())).unwrap();
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid amount to send");
        assert!(!form.is_submittable());
    }

    #[test]
    fn test_validate_rate_unavailable() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("1".to_string())).unwrap();
        form.dispatch(SwapEvent::SelectDestination(Token::new("DOGE"))).unwrap();

        let err = form.validate().unwrap_err();
        assert_eq!(err, SwapValidationError::RateUnavailable);
        assert_eq!(err.to_string(), "Unable to calculate exchange rate");
    }

    #[test]
    fn test_validate_builds_order() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("1.5".to_string())).unwrap();

        let order = form.validate().unwrap();
        assert_eq!(order.source_token, Token::new("BTC"));
        assert_eq!(order.destination_token, Token::new("ETH"));
        assert_eq!(order.source_amount, dec!(1.5));
        assert_eq!(order.destination_amount, dec!(30));
        assert_eq!(order.rate, dec!(20));
    }

    // =========================================================================
    // Submission
    // =========================================================================

    #[tokio::test]
    async fn test_submit_success_clears_amounts() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("1".to_string())).unwrap();

        let executor = SimulatedSwapExecutor::new(Duration::from_millis(5));
        let receipt = form.submit(&executor).await.unwrap();

        assert_eq!(receipt.message(), "Successfully swapped 1 BTC for 20 ETH");
        let state = form.state();
        assert_eq!(
            state.status,
            SubmissionStatus::Succeeded("Successfully swapped 1 BTC for 20 ETH".to_string())
        );
        assert_eq!(state.source_amount, "");
        assert_eq!(state.destination_amount, "");
        assert_eq!(state.error, None);
        assert_eq!(state.source_token, Some(Token::new("BTC")));
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_amounts() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("1".to_string())).unwrap();

        let err = form.submit(&FailingExecutor).await.unwrap_err();
        assert!(matches!(err, SwapError::Execution(_)));

        let state = form.state();
        assert_eq!(state.status, SubmissionStatus::Failed(SWAP_FAILED_MESSAGE.to_string()));
        assert_eq!(state.error.as_deref(), Some(SWAP_FAILED_MESSAGE));
        assert_eq!(state.source_amount, "1");
        assert_eq!(state.destination_amount, "20");
    }

    #[tokio::test]
    async fn test_submit_invalid_form_sets_error() {
        let mut form = form();
        let executor = SimulatedSwapExecutor::new(Duration::from_millis(1));

        let err = form.submit(&executor).await.unwrap_err();
        assert_eq!(err, SwapError::Validation(SwapValidationError::InvalidAmount));
        assert_eq!(
            form.state().error.as_deref(),
            Some("Please enter a valid amount to send")
        );
        assert_eq!(form.state().status, SubmissionStatus::Idle);

        let state = form.dispatch(SwapEvent::ClearError).unwrap();
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_submit_while_submitting_is_rejected() {
        let mut state = SwapFormState::initial(&prices());
        state.source_amount = "1".to_string();
        state.status = SubmissionStatus::Submitting;
        let mut form = SwapForm::with_state(state, prices());

        let executor = SimulatedSwapExecutor::new(Duration::from_millis(1));
        let err = form.submit(&executor).await.unwrap_err();
        assert_eq!(err, SwapError::AlreadySubmitting);
    }

    #[tokio::test]
    async fn test_cancelled_submit_returns_form_to_idle() {
        let mut form = form();
        form.dispatch(SwapEvent::EditSource("1".to_string())).unwrap();

        let slow = SimulatedSwapExecutor::new(Duration::from_secs(5));
        let outcome = tokio::time::timeout(Duration::from_millis(10), form.submit(&slow)).await;
        assert!(outcome.is_err());

        let state = form.state();
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert_eq!(state.error, None);
        assert_eq!(state.source_amount, "1");
        assert_eq!(state.destination_amount, "20");

        let fast = SimulatedSwapExecutor::new(Duration::from_millis(1));
        let receipt = form.submit(&fast).await.unwrap();
        assert_eq!(receipt.message(), "Successfully swapped 1 BTC for 20 ETH");
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    #[test]
    fn test_event_wire_format() {
        let event: SwapEvent =
            serde_json::from_str(r#"{"type":"editSource","value":"1.5"}"#).unwrap();
        assert_eq!(event, SwapEvent::EditSource("1.5".to_string()));

        let event: SwapEvent = serde_json::from_str(r#"{"type":"swapDirection"}"#).unwrap();
        assert_eq!(event, SwapEvent::SwapDirection);

        let event: SwapEvent =
            serde_json::from_str(r#"{"type":"selectSource","value":{"symbol":"ETH"}}"#).unwrap();
        assert_eq!(event, SwapEvent::SelectSource(Token::new("ETH")));
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_value(SubmissionStatus::Failed("x".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"state": "failed", "message": "x"}));

        let json = serde_json::to_value(SubmissionStatus::Idle).unwrap();
        assert_eq!(json, serde_json::json!({"state": "idle"}));
    }
}
