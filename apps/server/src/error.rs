use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tokenswap_core::errors::Error as CoreError;
use tokenswap_core::swap::{SwapError, SwapValidationError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::MarketData(_) => (StatusCode::BAD_GATEWAY, e.user_message()),
                CoreError::Swap(SwapError::Execution(_)) => {
                    (StatusCode::BAD_GATEWAY, e.user_message())
                }
                CoreError::Swap(_) => (StatusCode::BAD_REQUEST, e.user_message()),
                CoreError::Cache(_) | CoreError::Unexpected(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
                }
            },
            ApiError::NotFound(reason) => (StatusCode::NOT_FOUND, reason.clone()),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
        };
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<SwapError> for ApiError {
    fn from(err: SwapError) -> Self {
        ApiError::Core(CoreError::Swap(err))
    }
}

impl From<SwapValidationError> for ApiError {
    fn from(err: SwapValidationError) -> Self {
        ApiError::Core(CoreError::Swap(SwapError::Validation(err)))
    }
}
