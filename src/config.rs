//! Notifier configuration
//!
//! Everything the strategy selector and the senders need is read once into
//! [`NotifierConfig`] and passed to the notifier constructor.

use std::env;

use crate::error::NotifyError;

/// Deployment mode taken from `APP_ENV`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
  Production,
  Development,
  /// Any other value, including an unset variable.
  Unrecognized(String),
}

impl Mode {
  pub fn parse(value: &str) -> Self {
    match value {
      "production" => Mode::Production,
      "development" => Mode::Development,
      other => Mode::Unrecognized(other.to_string()),
    }
  }
}

/// Production email transport: self-hosted SMTP or the managed provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
  Smtp,
  Managed,
}

impl Transport {
  /// `IS_CLOUD` selects the managed provider whenever it holds any non-empty value.
  pub fn from_cloud_flag(flag: &str) -> Self {
    if flag.is_empty() {
      Transport::Smtp
    } else {
      Transport::Managed
    }
  }
}

#[derive(Debug, Clone, Default)]
pub struct SmtpConfig {
  pub host: String,
  /// `0` means the port was not configured.
  pub port: u16,
  pub username: String,
  pub password: String,
  /// Overrides the From mailbox; the username is used when unset.
  pub from_email: Option<String>,
  /// Raw `SMTP_PORT` text that did not parse; reported when SMTP is used.
  pub invalid_port: Option<String>,
}

impl SmtpConfig {
  pub fn validate(&self) -> Result<(), NotifyError> {
    if let Some(raw) = &self.invalid_port {
      return Err(NotifyError::configuration(format!(
        "SMTP_PORT is not a valid port number: {}",
        raw
      )));
    }
    if self.host.is_empty() || self.port == 0 || self.username.is_empty() || self.password.is_empty() {
      return Err(NotifyError::configuration(
        "SMTP settings not found (SMTP_HOST, SMTP_PORT, SMTP_USER and SMTP_PASSWORD are required)",
      ));
    }
    Ok(())
  }

  pub fn from_address(&self) -> &str {
    self.from_email.as_deref().unwrap_or(&self.username)
  }

  /// Never fails: a bad `SMTP_PORT` only matters once the SMTP sender runs.
  fn from_env() -> Self {
    let raw_port = env_or_empty("SMTP_PORT");
    let (port, invalid_port) = match raw_port.as_str() {
      "" => (0, None),
      raw => match raw.parse::<u16>() {
        Ok(port) => (port, None),
        Err(_) => (0, Some(raw_port.clone())),
      },
    };

    SmtpConfig {
      host: env_or_empty("SMTP_HOST"),
      port,
      username: env_or_empty("SMTP_USER"),
      password: env_or_empty("SMTP_PASSWORD"),
      from_email: env::var("SMTP_FROM").ok().filter(|v| !v.is_empty()),
      invalid_port,
    }
  }
}

#[derive(Debug, Clone)]
pub struct NotifierConfig {
  pub mode: Mode,
  pub transport: Transport,
  pub smtp: SmtpConfig,
  /// Region override for the managed provider; the AWS default chain is used otherwise.
  pub aws_region: Option<String>,
}

impl NotifierConfig {
  pub fn new(mode: Mode, transport: Transport) -> Self {
    NotifierConfig {
      mode,
      transport,
      smtp: SmtpConfig::default(),
      aws_region: None,
    }
  }

  pub fn with_smtp(mut self, smtp: SmtpConfig) -> Self {
    self.smtp = smtp;
    self
  }

  pub fn with_aws_region(mut self, region: impl Into<String>) -> Self {
    self.aws_region = Some(region.into());
    self
  }

  pub fn from_env() -> Result<Self, NotifyError> {
    let mut config = NotifierConfig::new(
      Mode::parse(&env_or_empty("APP_ENV")),
      Transport::from_cloud_flag(&env_or_empty("IS_CLOUD")),
    )
    .with_smtp(SmtpConfig::from_env());

    if let Some(region) = env::var("AWS_REGION").ok().filter(|v| !v.is_empty()) {
      config = config.with_aws_region(region);
    }

    Ok(config)
  }
}

fn env_or_empty(key: &str) -> String {
  env::var(key).unwrap_or_default()
}
