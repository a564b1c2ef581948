//! Clipboard port and its arboard adapter.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
  #[error("Clipboard unavailable: {0}")]
  Unavailable(String),

  #[error("Failed to copy to clipboard: {0}")]
  CopyFailed(String),
}

#[async_trait]
pub trait Clipboard: Send + Sync {
  async fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard through arboard (X11, Wayland, macOS, Windows).
#[derive(Debug, Default)]
pub struct ArboardClipboard;

impl ArboardClipboard {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
  async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
    let text = text.to_owned();

    // arboard blocks on the display server
    tokio::task::spawn_blocking(move || {
      let mut clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

      clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    })
    .await
    .map_err(|e| ClipboardError::CopyFailed(format!("Task join error: {}", e)))?
  }
}
