use async_trait::async_trait;
use smartpos_shared::ContactSubmission;

/// Somewhere a new submission gets announced to a human.
///
/// The contact handler calls [`notify`](NotificationSink::notify) once per
/// valid submission and never retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, submission: &ContactSubmission) -> anyhow::Result<()>;
}

/// Subject and plain-text body for a submission notification.
pub fn render_notification(submission: &ContactSubmission) -> (String, String) {
    let subject = format!("New Contact Form Submission from {}", submission.name);
    let body = format!(
        "New Contact Form Submission\n\n\
         Name: {}\n\
         Business: {}\n\
         Phone: {}\n\
         Email: {}\n\
         Interested Plan: {}\n\n\
         Message:\n{}\n",
        submission.name,
        submission.business_name,
        submission.phone,
        submission.email.as_deref().unwrap_or("Not provided"),
        submission.interested_plan.as_deref().unwrap_or("Not specified"),
        submission.message,
    );
    (subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "John Doe".to_string(),
            business_name: "My Shop".to_string(),
            phone: "0712345678".to_string(),
            email: None,
            message: "I would like a demo please.".to_string(),
            interested_plan: Some("Business".to_string()),
        }
    }

    #[test]
    fn renders_subject_and_placeholders() {
        let (subject, body) = render_notification(&submission());
        assert_eq!(subject, "New Contact Form Submission from John Doe");
        assert!(body.contains("Business: My Shop\n"));
        assert!(body.contains("Email: Not provided\n"));
        assert!(body.contains("Interested Plan: Business\n"));
        assert!(body.ends_with("I would like a demo please.\n"));
    }
}
