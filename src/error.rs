use thiserror::Error;

use crate::local::{ClipboardError, NotificationError};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by every delivery strategy.
///
/// Nothing here is retried or recovered locally; the caller sees the first failure.
#[derive(Debug, Error)]
pub enum NotifyError {
  #[error("Configuration error: {0}")]
  Configuration(String),

  #[error("Invalid address: {0}")]
  InvalidAddress(String),

  #[error("{context}: {source}")]
  Transport {
    context: String,
    #[source]
    source: BoxError,
  },

  #[error(transparent)]
  Clipboard(#[from] ClipboardError),

  #[error(transparent)]
  Notification(#[from] NotificationError),
}

impl NotifyError {
  pub fn configuration(message: impl Into<String>) -> Self {
    NotifyError::Configuration(message.into())
  }

  pub fn transport<E>(context: impl Into<String>, source: E) -> Self
  where
    E: Into<BoxError>,
  {
    NotifyError::Transport {
      context: context.into(),
      source: source.into(),
    }
  }
}
