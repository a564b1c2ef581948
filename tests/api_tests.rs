use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::Body,
  http::{self, Request, StatusCode},
};
use tower::ServiceExt; // for `app.oneshot()`
use verification_notifier::{
  app::create_app,
  state::SharedAppState,
  DeliveryStrategy, Mode, NotifierConfig, NotifyError, SmtpConfig, Transport, VerificationNotifier, VerificationSender,
};

#[derive(Clone, Default)]
struct CapturingSender {
  sent: Arc<Mutex<Vec<(String, String)>>>,
}

#[async_trait]
impl VerificationSender for CapturingSender {
  async fn send_verification_code(&self, recipient: &str, code: &str) -> Result<(), NotifyError> {
    self.sent.lock().unwrap().push((recipient.to_string(), code.to_string()));
    Ok(())
  }
}

fn post_code(email: &str, code: &str) -> Request<Body> {
  Request::builder()
    .method(http::Method::POST)
    .uri("/api/v1/verification-codes")
    .header("content-type", "application/json")
    .body(Body::from(
      serde_json::json!({ "email": email, "code": code }).to_string(),
    ))
    .unwrap()
}

#[tokio::test]
async fn test_health_reports_strategy() {
  let notifier = VerificationNotifier::new(DeliveryStrategy::Managed, Box::new(CapturingSender::default()));
  let app = create_app(SharedAppState::new(notifier));

  let response = app
    .oneshot(
      Request::builder()
        .method(http::Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);

  let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
  assert_eq!(json["status"], "ok");
  assert_eq!(json["strategy"], "managed");
}

#[tokio::test]
async fn test_code_is_passed_through_verbatim() {
  let sender = CapturingSender::default();
  let notifier = VerificationNotifier::new(DeliveryStrategy::Smtp, Box::new(sender.clone()));
  let app = create_app(SharedAppState::new(notifier));

  let response = app.oneshot(post_code("user@example.com", "<b>48 29 13</b>")).await.unwrap();

  assert_eq!(response.status(), StatusCode::NO_CONTENT);
  assert_eq!(
    *sender.sent.lock().unwrap(),
    vec![("user@example.com".to_string(), "<b>48 29 13</b>".to_string())]
  );
}

#[tokio::test]
async fn test_unrecognized_mode_accepts_request_without_delivery() {
  let config = NotifierConfig::new(Mode::Unrecognized("test".to_string()), Transport::Smtp);
  let notifier = VerificationNotifier::from_config(config).await;
  let app = create_app(SharedAppState::new(notifier));

  let response = app.oneshot(post_code("user@example.com", "482913")).await.unwrap();

  assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_missing_smtp_settings_return_server_error() {
  let config = NotifierConfig::new(Mode::Production, Transport::Smtp).with_smtp(SmtpConfig {
    host: "smtp.example.com".to_string(),
    port: 587,
    username: "mailer@example.com".to_string(),
    password: String::new(),
    from_email: None,
    invalid_port: None,
  });
  let notifier = VerificationNotifier::from_config(config).await;
  let app = create_app(SharedAppState::new(notifier));

  let response = app.oneshot(post_code("user@example.com", "482913")).await.unwrap();

  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
  assert_eq!(json["status_code"], 500);
}
