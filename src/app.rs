use axum::{extract::State, routing::get, Json, Router};

use crate::{
  domains::verification::{model::HealthResponse, rest::verification_routes},
  state::{AppState, SharedAppState},
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/health", get(health_handler))
    .nest("/api/v1", verification_routes())
    .with_state(state)
}

pub async fn health_handler(State(state): State<SharedAppState>) -> Json<HealthResponse> {
  Json(HealthResponse {
    status: "ok".to_string(),
    strategy: state.strategy().to_string(),
  })
}
