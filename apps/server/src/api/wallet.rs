use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use tokenswap_core::wallet::{prepare_wallet_rows, WalletBalance, WalletRow};

#[derive(Deserialize)]
struct WalletRowsRequest {
    balances: Vec<WalletBalance>,
}

async fn wallet_rows(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WalletRowsRequest>,
) -> ApiResult<Json<Vec<WalletRow>>> {
    let prices = state.price_service.fetch_prices().await?;
    Ok(Json(prepare_wallet_rows(&request.balances, &prices)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/wallet/rows", post(wallet_rows))
}
