use axum::{
  extract::{Json, State},
  http::StatusCode,
  routing::{post, Router},
};

use super::model::SendVerificationCodeRequest;
use crate::{
  state::{AppState, SharedAppState},
  utils::error::AppError,
};

pub fn verification_routes() -> Router<SharedAppState> {
  Router::new().route("/verification-codes", post(send_verification_code_handler))
}

pub async fn send_verification_code_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<SendVerificationCodeRequest>,
) -> Result<StatusCode, AppError> {
  state.send_verification_code(payload).await?;
  Ok(StatusCode::NO_CONTENT)
}
