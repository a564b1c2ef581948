use serde::{Deserialize, Serialize};

pub const VERIFICATION_SUBJECT: &str = "Your Plandex Pin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
  pub to: String,
  pub subject: String,
  pub html_body: String,
  pub text_body: String,
}

impl EmailMessage {
  pub fn new(to: String, subject: String, html_body: String, text_body: String) -> Self {
    EmailMessage {
      to,
      subject,
      html_body,
      text_body,
    }
  }

  /// The code is inserted as-is into both bodies; it is not HTML-escaped.
  pub fn verification(recipient: &str, code: &str) -> Self {
    EmailMessage::new(
      recipient.to_string(),
      VERIFICATION_SUBJECT.to_string(),
      format!("<p>Hi there,</p><p>Your pin is: <strong>{}</strong></p>", code),
      format!("Hi there,\n\nYour pin is: {}", code),
    )
  }
}
