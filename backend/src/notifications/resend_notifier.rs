use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;
use smartpos_shared::ContactSubmission;

use super::sink::{render_notification, NotificationSink};
use crate::config::ResendSettings;

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Emails each submission to the shop owner through Resend.
pub struct ResendNotifier {
    client: Resend,
    from: String,
    to: String,
}

impl ResendNotifier {
    pub fn new(settings: &ResendSettings) -> Self {
        Self {
            client: Resend::new(&settings.api_key),
            from: settings.from.clone(),
            to: settings.to.clone(),
        }
    }
}

#[async_trait]
impl NotificationSink for ResendNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        let (subject, body) = render_notification(submission);
        let email = CreateEmailBaseOptions::new(self.from.clone(), [self.to.clone()], subject)
            .with_text(&body);

        tokio::time::timeout(SEND_TIMEOUT, self.client.emails.send(email))
            .await
            .map_err(|_| anyhow!("Resend did not answer within {:?}", SEND_TIMEOUT))?
            .context("Resend rejected the contact notification")?;

        tracing::info!("Contact notification emailed to {}", self.to);
        Ok(())
    }
}
