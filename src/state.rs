use std::sync::Arc;

use crate::{
  domains::verification::model::SendVerificationCodeRequest,
  error::NotifyError,
  notifier::{DeliveryStrategy, VerificationNotifier},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_verification_code(
    &self,
    req: SendVerificationCodeRequest,
  ) -> impl std::future::Future<Output = Result<(), NotifyError>> + Send;
  fn strategy(&self) -> &DeliveryStrategy;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub notifier: Arc<VerificationNotifier>,
}

impl SharedAppState {
  pub fn new(notifier: VerificationNotifier) -> Self {
    Self {
      notifier: Arc::new(notifier),
    }
  }
}

impl AppState for SharedAppState {
  async fn send_verification_code(&self, req: SendVerificationCodeRequest) -> Result<(), NotifyError> {
    self.notifier.send_verification_code(&req.email, &req.code).await
  }

  fn strategy(&self) -> &DeliveryStrategy {
    self.notifier.strategy()
  }
}
