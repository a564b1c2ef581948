use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendVerificationCodeRequest {
  pub email: String,
  pub code: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
  pub status: String,
  pub strategy: String,
}
