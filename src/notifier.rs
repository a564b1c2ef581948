//! Verification notifier
//!
//! Picks one delivery strategy from [`NotifierConfig`] at construction time and
//! routes every `send_verification_code` call to it. There is no fallback
//! between strategies.

use std::fmt;

use async_trait::async_trait;

use crate::{
  config::{Mode, NotifierConfig, Transport},
  email::{ManagedEmailSender, SesEmailApi, SmtpSender},
  error::NotifyError,
  local::LocalNotifier,
};

/// One way of getting a verification code to a user.
#[async_trait]
pub trait VerificationSender: Send + Sync {
  async fn send_verification_code(&self, recipient: &str, code: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStrategy {
  Smtp,
  Managed,
  Local,
  /// The mode was not recognized; calls succeed without delivering anything.
  Disabled { mode: String },
}

impl DeliveryStrategy {
  pub fn as_str(&self) -> &'static str {
    match self {
      DeliveryStrategy::Smtp => "smtp",
      DeliveryStrategy::Managed => "managed",
      DeliveryStrategy::Local => "local",
      DeliveryStrategy::Disabled { .. } => "disabled",
    }
  }
}

impl fmt::Display for DeliveryStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

pub fn select_strategy(config: &NotifierConfig) -> DeliveryStrategy {
  match (&config.mode, config.transport) {
    (Mode::Production, Transport::Smtp) => DeliveryStrategy::Smtp,
    (Mode::Production, Transport::Managed) => DeliveryStrategy::Managed,
    (Mode::Development, _) => DeliveryStrategy::Local,
    (Mode::Unrecognized(mode), _) => DeliveryStrategy::Disabled { mode: mode.clone() },
  }
}

/// Stands in for an unrecognized mode. Nothing is sent, but every call is logged.
pub struct DisabledSender {
  mode: String,
}

impl DisabledSender {
  pub fn new(mode: impl Into<String>) -> Self {
    Self { mode: mode.into() }
  }
}

#[async_trait]
impl VerificationSender for DisabledSender {
  async fn send_verification_code(&self, recipient: &str, _code: &str) -> Result<(), NotifyError> {
    tracing::warn!(
      mode = %self.mode,
      recipient,
      "APP_ENV is neither production nor development; verification code was not delivered"
    );
    Ok(())
  }
}

pub struct VerificationNotifier {
  strategy: DeliveryStrategy,
  sender: Box<dyn VerificationSender>,
}

impl VerificationNotifier {
  pub fn new(strategy: DeliveryStrategy, sender: Box<dyn VerificationSender>) -> Self {
    Self { strategy, sender }
  }

  pub async fn from_config(config: NotifierConfig) -> Self {
    let strategy = select_strategy(&config);

    let sender: Box<dyn VerificationSender> = match &strategy {
      DeliveryStrategy::Smtp => Box::new(SmtpSender::new(config.smtp)),
      DeliveryStrategy::Managed => Box::new(ManagedEmailSender::new(SesEmailApi::from_env(config.aws_region).await)),
      DeliveryStrategy::Local => Box::new(LocalNotifier::system()),
      DeliveryStrategy::Disabled { mode } => {
        tracing::warn!(mode = %mode, "unrecognized APP_ENV, verification codes will not be delivered");
        Box::new(DisabledSender::new(mode.clone()))
      }
    };

    tracing::info!(strategy = %strategy, "verification notifier ready");
    Self::new(strategy, sender)
  }

  pub fn strategy(&self) -> &DeliveryStrategy {
    &self.strategy
  }

  pub async fn send_verification_code(&self, recipient: &str, code: &str) -> Result<(), NotifyError> {
    let result = self.sender.send_verification_code(recipient, code).await;

    if let Err(ref e) = result {
      tracing::error!(strategy = %self.strategy, recipient, "failed to send verification code: {}", e);
    }

    result
  }
}
