use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::error::NotifyError;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn bad_gateway(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_GATEWAY, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(err: AppError) -> Self {
    err.status_code
  }
}

impl From<NotifyError> for AppError {
  fn from(error: NotifyError) -> Self {
    match error {
      NotifyError::InvalidAddress(msg) => AppError::bad_request(format!("Invalid address: {}", msg)),
      NotifyError::Configuration(msg) => {
        tracing::error!("Notifier misconfigured: {}", msg);
        AppError::internal_server_error("Verification delivery is not configured")
      }
      NotifyError::Transport { .. } => {
        tracing::error!("Delivery error: {:?}", error);
        AppError::bad_gateway("Failed to deliver verification code")
      }
      NotifyError::Clipboard(_) | NotifyError::Notification(_) => {
        tracing::error!("Local delivery error: {}", error);
        AppError::internal_server_error(error.to_string())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invalid_address_maps_to_bad_request() {
    let err: AppError = NotifyError::InvalidAddress("\"nope\"".to_string()).into();
    assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
  }

  #[test]
  fn test_configuration_maps_to_internal_server_error() {
    let err: AppError = NotifyError::configuration("SMTP settings not found").into();
    assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, "Verification delivery is not configured");
  }

  #[test]
  fn test_transport_maps_to_bad_gateway() {
    let source = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err: AppError = NotifyError::transport("error sending email via SMTP", source).into();
    assert_eq!(StatusCode::from(err), StatusCode::BAD_GATEWAY);
  }

  #[test]
  fn test_local_errors_map_to_internal_server_error() {
    let err: AppError = NotifyError::Notification(crate::local::NotificationError::SendFailed(
      "no daemon".to_string(),
    ))
    .into();
    assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.message.contains("no daemon"));
  }
}
