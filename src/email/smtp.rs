use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox, MultiPart, SinglePart},
  transport::smtp::authentication::{Credentials, Mechanism},
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::{
  config::SmtpConfig,
  email::types::EmailMessage,
  error::NotifyError,
  notifier::VerificationSender,
};

/// Hosts that are reached without TLS (loopback and local catch-all SMTP servers).
const PLAINTEXT_HOSTS: [&str; 5] = ["localhost", "127.0.0.1", "::1", "mailhog", "mailpit"];

pub struct SmtpSender {
  smtp_config: SmtpConfig,
}

impl SmtpSender {
  pub fn new(smtp_config: SmtpConfig) -> Self {
    SmtpSender { smtp_config }
  }

  /// Sends one message over a fresh, authenticated SMTP session.
  ///
  /// Settings are checked before anything touches the network.
  pub async fn send_email(&self, message: &EmailMessage) -> Result<(), NotifyError> {
    self.smtp_config.validate()?;

    let email = build_message(self.smtp_config.from_address(), message)?;
    let transporter = self.transporter()?;

    transporter
      .send(email)
      .await
      .map_err(|e| NotifyError::transport("error sending email via SMTP", e))?;

    tracing::info!(to = %message.to, host = %self.smtp_config.host, "verification email sent via SMTP");
    Ok(())
  }

  fn transporter(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, NotifyError> {
    let creds = Credentials::new(self.smtp_config.username.clone(), self.smtp_config.password.clone());
    let host = self.smtp_config.host.as_str();

    let builder = if PLAINTEXT_HOSTS.contains(&host) {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
        .map_err(|e| NotifyError::transport(format!("error configuring TLS for {}", host), e))?
    };

    Ok(
      builder
        .credentials(creds)
        .authentication(vec![Mechanism::Plain])
        .port(self.smtp_config.port)
        .build(),
    )
  }
}

#[async_trait]
impl VerificationSender for SmtpSender {
  async fn send_verification_code(&self, recipient: &str, code: &str) -> Result<(), NotifyError> {
    let message = EmailMessage::verification(recipient, code);
    self.send_email(&message).await
  }
}

/// Builds a multipart/alternative message with a text part followed by an HTML part.
///
/// The boundary is generated per message by lettre. `from` must be a valid
/// mailbox: when the SMTP username is not one (an API-key login such as
/// `apikey`), set `SMTP_FROM`, otherwise this returns `Configuration`.
pub fn build_message(from: &str, message: &EmailMessage) -> Result<Message, NotifyError> {
  let from: Mailbox = from
    .parse()
    .map_err(|e| NotifyError::configuration(format!("invalid From address {:?}: {}", from, e)))?;
  let to: Mailbox = message
    .to
    .parse()
    .map_err(|e| NotifyError::InvalidAddress(format!("{:?}: {}", message.to, e)))?;

  Message::builder()
    .from(from)
    .to(to)
    .subject(&message.subject)
    .multipart(
      MultiPart::alternative()
        .singlepart(
          SinglePart::builder()
            .header(ContentType::TEXT_PLAIN)
            .body(message.text_body.clone()),
        )
        .singlepart(
          SinglePart::builder()
            .header(ContentType::TEXT_HTML)
            .body(message.html_body.clone()),
        ),
    )
    .map_err(|e| NotifyError::configuration(format!("error building message: {}", e)))
}
