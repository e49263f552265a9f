use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokenswap_core::{
    prices::PriceData,
    tokens::{selectable_tokens, Token},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenView {
    symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    icon_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenList {
    tokens: Vec<TokenView>,
    fallback_icon_url: String,
}

#[derive(Deserialize)]
struct TokensQuery {
    /// Symbol already chosen in the other picker.
    exclude: Option<String>,
}

#[derive(Deserialize)]
struct RateQuery {
    from: String,
    to: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RateView {
    from: String,
    to: String,
    rate: Decimal,
    formatted_rate: String,
    description: Option<String>,
}

async fn get_prices(State(state): State<Arc<AppState>>) -> ApiResult<Json<PriceData>> {
    let prices = state.price_service.fetch_prices().await?;
    Ok(Json(prices.as_ref().clone()))
}

async fn invalidate_prices(State(state): State<Arc<AppState>>) -> StatusCode {
    state.price_service.invalidate();
    StatusCode::NO_CONTENT
}

async fn get_tokens(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TokensQuery>,
) -> ApiResult<Json<TokenList>> {
    let tokens = state.price_service.get_tokens().await?;
    let exclude = query.exclude.as_deref().map(Token::new);
    let tokens = selectable_tokens(&tokens, exclude.as_ref())
        .into_iter()
        .map(|token| TokenView {
            icon_url: state.icon_resolver.icon_url(&token),
            symbol: token.symbol,
            name: token.name,
        })
        .collect();

    Ok(Json(TokenList {
        tokens,
        fallback_icon_url: state.icon_resolver.fallback_icon_url(),
    }))
}

async fn get_rate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RateQuery>,
) -> ApiResult<Json<RateView>> {
    let prices = state.price_service.fetch_prices().await?;
    let (from, to) = (Token::new(&query.from), Token::new(&query.to));
    for token in [&from, &to] {
        if prices.find_price(&token.symbol).is_none() {
            return Err(ApiError::NotFound(format!("No price for token {}", token.symbol)));
        }
    }

    let rate = state
        .price_service
        .get_exchange_rate(&from.symbol, &to.symbol)
        .await?;
    Ok(Json(RateView {
        description: rate.describe(&from, &to),
        rate: rate.rate,
        formatted_rate: rate.formatted_rate,
        from: from.symbol,
        to: to.symbol,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prices", get(get_prices))
        .route("/prices/invalidate", post(invalidate_prices))
        .route("/tokens", get(get_tokens))
        .route("/rates", get(get_rate))
}
