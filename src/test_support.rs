use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  error::NotifyError,
  notifier::{DeliveryStrategy, VerificationNotifier, VerificationSender},
  state::SharedAppState,
};

/// Records every (recipient, code) pair it is asked to deliver.
#[derive(Clone, Default)]
pub struct RecordingSender {
  calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingSender {
  pub fn calls(&self) -> Vec<(String, String)> {
    self.calls.lock().expect("lock calls").clone()
  }
}

#[async_trait]
impl VerificationSender for RecordingSender {
  async fn send_verification_code(&self, recipient: &str, code: &str) -> Result<(), NotifyError> {
    self
      .calls
      .lock()
      .expect("lock calls")
      .push((recipient.to_string(), code.to_string()));
    Ok(())
  }
}

pub struct FailingSender(pub fn() -> NotifyError);

#[async_trait]
impl VerificationSender for FailingSender {
  async fn send_verification_code(&self, _recipient: &str, _code: &str) -> Result<(), NotifyError> {
    Err((self.0)())
  }
}

pub fn app_with_sender(sender: Box<dyn VerificationSender>) -> Router {
  let notifier = VerificationNotifier::new(DeliveryStrategy::Smtp, sender);
  create_app(SharedAppState::new(notifier))
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
