//! Email delivery
//!
//! Two production transports share [`EmailMessage`]: a self-hosted SMTP relay
//! via lettre and Amazon SES v2 as the managed provider.

mod ses;
mod smtp;
mod types;

pub use ses::{EmailApi, ManagedEmailSender, SesEmailApi, SUPPORT_ADDRESS};
pub use smtp::{build_message, SmtpSender};
pub use types::{EmailMessage, VERIFICATION_SUBJECT};
