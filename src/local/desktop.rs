//! Desktop notification port and its notify-rust adapter.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum NotificationError {
  #[error("Failed to show notification: {0}")]
  SendFailed(String),
}

#[async_trait]
pub trait DesktopNotifier: Send + Sync {
  async fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError>;
}

pub struct NotifyRustNotifier {
  app_name: String,
}

impl NotifyRustNotifier {
  pub fn new() -> Self {
    Self::with_app_name("verification-notifier")
  }

  pub fn with_app_name(app_name: impl Into<String>) -> Self {
    Self {
      app_name: app_name.into(),
    }
  }
}

impl Default for NotifyRustNotifier {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl DesktopNotifier for NotifyRustNotifier {
  async fn notify(&self, title: &str, message: &str) -> Result<(), NotificationError> {
    let title = title.to_owned();
    let message = message.to_owned();
    let app_name = self.app_name.clone();

    tokio::task::spawn_blocking(move || {
      notify_rust::Notification::new()
        .appname(&app_name)
        .summary(&title)
        .body(&message)
        .show()
        .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

      Ok(())
    })
    .await
    .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
  }
}
