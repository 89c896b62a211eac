use std::sync::Arc;

use axum::{
    extract::{rejection::BytesRejection, State},
    Json,
};
use bytes::Bytes;
use serde_json::Value;
use smartpos_shared::{contact, ContactResponse};

use crate::config::NotifyFailurePolicy;
use crate::error::AppError;
use crate::AppState;

/// `POST /api/contact`
///
/// The body is read and parsed here instead of through the `Json` extractor
/// so an oversized or malformed body gets the generic 500 body rather than
/// axum's plain-text rejection.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let body = body?;
    let raw: Value = serde_json::from_slice(&body)?;

    let submission = contact::validate(&raw).map_err(|failure| {
        tracing::info!("Rejected contact submission: {:?}", failure.to_error_map());
        failure
    })?;

    tracing::info!(
        "Contact submission from {} ({})",
        submission.business_name,
        submission.interested_plan.as_deref().unwrap_or("no plan")
    );

    if let Err(e) = state.notifier.notify(&submission).await {
        match state.notify_policy {
            NotifyFailurePolicy::Lenient => {
                tracing::error!("Failed to deliver contact notification: {:#}", e);
            }
            NotifyFailurePolicy::Strict => return Err(AppError::Notification(e)),
        }
    }

    Ok(Json(ContactResponse::accepted()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::sink::MockNotificationSink;
    use serde_json::json;
    use smartpos_shared::response::SUCCESS_MESSAGE;

    fn state(notifier: MockNotificationSink, notify_policy: NotifyFailurePolicy) -> State<Arc<AppState>> {
        State(Arc::new(AppState {
            notifier: Arc::new(notifier),
            notify_policy,
        }))
    }

    fn body(value: Value) -> Result<Bytes, BytesRejection> {
        Ok(Bytes::from(serde_json::to_vec(&value).unwrap()))
    }

    fn scenario_a() -> Value {
        json!({
            "name": "John Doe",
            "businessName": "My Shop",
            "phone": "0712345678",
            "message": "I would like a demo please."
        })
    }

    #[tokio::test]
    async fn valid_submission_notifies_once() {
        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_notify()
            .withf(|s| s.name == "John Doe" && s.email.is_none())
            .times(1)
            .returning(|_| Ok(()));

        let Json(response) = submit_contact(state(notifier, NotifyFailurePolicy::Lenient), body(scenario_a()))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.message, SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn invalid_submission_never_notifies() {
        let mut notifier = MockNotificationSink::new();
        notifier.expect_notify().times(0);

        let mut payload = scenario_a();
        payload["phone"] = json!("123");
        let err = submit_contact(state(notifier, NotifyFailurePolicy::Lenient), body(payload))
            .await
            .unwrap_err();
        match err {
            AppError::Validation(failure) => {
                assert_eq!(failure.to_error_map().keys().collect::<Vec<_>>(), vec!["phone"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_never_notifies() {
        let mut notifier = MockNotificationSink::new();
        notifier.expect_notify().times(0);

        let err = submit_contact(
            state(notifier, NotifyFailurePolicy::Lenient),
            Ok(Bytes::from_static(b"{\"name\": ")),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn lenient_policy_hides_notify_failure() {
        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_notify()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("smtp down")));

        let Json(response) = submit_contact(state(notifier, NotifyFailurePolicy::Lenient), body(scenario_a()))
            .await
            .unwrap();
        assert!(response.success);
    }

    #[tokio::test]
    async fn strict_policy_surfaces_notify_failure() {
        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_notify()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("smtp down")));

        let err = submit_contact(state(notifier, NotifyFailurePolicy::Strict), body(scenario_a()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Notification(_)));
    }
}
