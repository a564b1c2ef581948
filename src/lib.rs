pub mod app;
pub mod config;
pub mod domains;
pub mod email;
pub mod error;
pub mod local;
pub mod notifier;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::{Mode, NotifierConfig, SmtpConfig, Transport};
pub use error::NotifyError;
pub use notifier::{select_strategy, DeliveryStrategy, VerificationNotifier, VerificationSender};
pub use utils::error::AppError;
