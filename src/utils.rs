pub mod error;

use crate::{config::NotifierConfig, notifier::VerificationNotifier};

pub async fn init_notifier() -> anyhow::Result<VerificationNotifier> {
  let config = NotifierConfig::from_env()?;
  Ok(VerificationNotifier::from_config(config).await)
}
