use async_trait::async_trait;
use smartpos_shared::ContactSubmission;

use super::sink::NotificationSink;

/// Default sink: the submission only ends up in the server log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        tracing::info!(
            name = %submission.name,
            business = %submission.business_name,
            phone = %submission.phone,
            email = submission.email.as_deref().unwrap_or("Not provided"),
            plan = submission.interested_plan.as_deref().unwrap_or("Not specified"),
            message = %submission.message,
            "New contact form submission"
        );
        Ok(())
    }
}
