//! Managed email delivery through Amazon SES v2.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sesv2::{
  types::{Body, Content, Destination, EmailContent, Message},
  Client,
};

use crate::{email::types::EmailMessage, error::NotifyError, notifier::VerificationSender};

/// Every managed-provider email is sent from this address.
pub const SUPPORT_ADDRESS: &str = "support@plandex.ai";

const CHARSET: &str = "UTF-8";

/// Send-email call of a managed provider.
#[async_trait]
pub trait EmailApi: Send + Sync {
  async fn send_email(&self, from: &str, message: &EmailMessage) -> Result<(), NotifyError>;
}

pub struct SesEmailApi {
  client: Client,
}

impl SesEmailApi {
  pub fn new(client: Client) -> Self {
    Self { client }
  }

  /// Builds a client from the AWS default credential and region chain.
  pub async fn from_env(region: Option<String>) -> Self {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
      loader = loader.region(Region::new(region));
    }

    let config = loader.load().await;
    Self::new(Client::new(&config))
  }
}

#[async_trait]
impl EmailApi for SesEmailApi {
  async fn send_email(&self, from: &str, message: &EmailMessage) -> Result<(), NotifyError> {
    let destination = Destination::builder().to_addresses(&message.to).build();
    let content = email_content(message)?;

    self
      .client
      .send_email()
      .from_email_address(from)
      .destination(destination)
      .content(content)
      .send()
      .await
      .map_err(|e| NotifyError::transport("error sending email via SES", e))?;

    Ok(())
  }
}

fn utf8_content(data: &str, part: &str) -> Result<Content, NotifyError> {
  Content::builder()
    .data(data)
    .charset(CHARSET)
    .build()
    .map_err(|e| NotifyError::configuration(format!("error building SES {}: {}", part, e)))
}

pub(crate) fn email_content(message: &EmailMessage) -> Result<EmailContent, NotifyError> {
  let body = Body::builder()
    .html(utf8_content(&message.html_body, "HTML body")?)
    .text(utf8_content(&message.text_body, "text body")?)
    .build();

  let simple = Message::builder()
    .subject(utf8_content(&message.subject, "subject")?)
    .body(body)
    .build();

  Ok(EmailContent::builder().simple(simple).build())
}

pub struct ManagedEmailSender<A = SesEmailApi> {
  api: A,
}

impl<A: EmailApi> ManagedEmailSender<A> {
  pub fn new(api: A) -> Self {
    Self { api }
  }

  pub async fn send_email(&self, message: &EmailMessage) -> Result<(), NotifyError> {
    self.api.send_email(SUPPORT_ADDRESS, message).await?;

    tracing::info!(to = %message.to, "verification email sent via managed provider");
    Ok(())
  }
}

#[async_trait]
impl<A: EmailApi> VerificationSender for ManagedEmailSender<A> {
  async fn send_verification_code(&self, recipient: &str, code: &str) -> Result<(), NotifyError> {
    let message = EmailMessage::verification(recipient, code);
    self.send_email(&message).await
  }
}
