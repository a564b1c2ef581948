//! Local development delivery
//!
//! Puts the code on the clipboard and raises a desktop notification. Only
//! meant for a developer running the server on their own machine; it makes
//! no sense headless or with more than one user.

mod clipboard;
mod desktop;

use async_trait::async_trait;

pub use clipboard::{ArboardClipboard, Clipboard, ClipboardError};
pub use desktop::{DesktopNotifier, NotificationError, NotifyRustNotifier};

use crate::{error::NotifyError, notifier::VerificationSender};

pub const NOTIFICATION_TITLE: &str = "Verification Pin";

pub struct LocalNotifier<C = ArboardClipboard, N = NotifyRustNotifier> {
  clipboard: C,
  notifier: N,
}

impl LocalNotifier {
  pub fn system() -> Self {
    Self::new(ArboardClipboard::new(), NotifyRustNotifier::new())
  }
}

impl<C: Clipboard, N: DesktopNotifier> LocalNotifier<C, N> {
  pub fn new(clipboard: C, notifier: N) -> Self {
    Self { clipboard, notifier }
  }

  /// Copies `code` to the clipboard, then announces it.
  ///
  /// A clipboard failure stops here; no notification is shown.
  pub async fn notify(&self, recipient: &str, code: &str) -> Result<(), NotifyError> {
    self.clipboard.copy(code).await?;

    let message = format!("Verification pin {} copied to clipboard {}", code, recipient);
    self.notifier.notify(NOTIFICATION_TITLE, &message).await?;

    tracing::debug!(recipient, "verification pin copied to clipboard");
    Ok(())
  }
}

#[async_trait]
impl<C: Clipboard, N: DesktopNotifier> VerificationSender for LocalNotifier<C, N> {
  async fn send_verification_code(&self, recipient: &str, code: &str) -> Result<(), NotifyError> {
    self.notify(recipient, code).await
  }
}
