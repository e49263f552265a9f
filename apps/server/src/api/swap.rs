use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tokenswap_core::{
    fx::ExchangeRate,
    swap::{SwapError, SwapEvent, SwapForm, SwapFormState, SwapReceipt},
};

#[derive(Deserialize)]
struct TransitionRequest {
    state: SwapFormState,
    event: SwapEvent,
}

#[derive(Deserialize)]
struct SubmitRequest {
    state: SwapFormState,
}

/// Form state plus everything derived from it that the page shows.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FormView {
    state: SwapFormState,
    exchange_rate: ExchangeRate,
    rate_description: Option<String>,
    submittable: bool,
}

impl From<&SwapForm> for FormView {
    fn from(form: &SwapForm) -> Self {
        Self {
            state: form.state().clone(),
            exchange_rate: form.exchange_rate(),
            rate_description: form.rate_description(),
            submittable: form.is_submittable(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitView {
    #[serde(flatten)]
    form: FormView,
    receipt: Option<SwapReceipt>,
}

async fn new_form(State(state): State<Arc<AppState>>) -> ApiResult<Json<FormView>> {
    let prices = state.price_service.fetch_prices().await?;
    let form = SwapForm::new(prices);
    Ok(Json(FormView::from(&form)))
}

async fn transition_form(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TransitionRequest>,
) -> ApiResult<Json<FormView>> {
    let prices = state.price_service.fetch_prices().await?;
    let mut form = SwapForm::with_state(request.state, prices);
    form.dispatch(request.event)?;
    Ok(Json(FormView::from(&form)))
}

/// Runs the swap. Executor failures are reported on the returned state, not
/// as an error status, so the client can show them and retry.
async fn submit_form(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitRequest>,
) -> ApiResult<Json<SubmitView>> {
    let prices = state.price_service.fetch_prices().await?;
    let mut form = SwapForm::with_state(request.state, prices);

    let receipt = match form.submit(state.swap_executor.as_ref()).await {
        Ok(receipt) => Some(receipt),
        Err(SwapError::Execution(e)) => {
            tracing::warn!("Swap execution failed: {}", e);
            None
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(SubmitView {
        form: FormView::from(&form),
        receipt,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/swap/form", post(new_form))
        .route("/swap/transition", post(transition_form))
        .route("/swap/submit", post(submit_form))
}
