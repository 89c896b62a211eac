//! Where accepted contact submissions are announced.

pub mod log_notifier;
pub mod resend_notifier;
pub mod sink;

use std::sync::Arc;

use crate::config::Config;

pub use log_notifier::LogNotifier;
pub use resend_notifier::ResendNotifier;
pub use sink::NotificationSink;

/// Resend when an API key is configured, the log otherwise.
pub fn from_config(config: &Config) -> Arc<dyn NotificationSink> {
    match &config.resend {
        Some(settings) => {
            tracing::info!("Contact notifications go to {} via Resend", settings.to);
            Arc::new(ResendNotifier::new(settings))
        }
        None => {
            tracing::info!("RESEND_API_KEY not set, contact submissions are only logged");
            Arc::new(LogNotifier)
        }
    }
}
