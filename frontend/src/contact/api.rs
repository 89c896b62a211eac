//! Transport for the contact form.

use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use smartpos_shared::{ContactForm, ContactResponse};

use super::controller::{SubmitError, SubmitOutcome};
use crate::config;

/// Upper bound on one submission round trip.
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

pub async fn submit_contact(form: &ContactForm) -> SubmitOutcome {
    let request = Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(form)
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let send = Box::pin(request.send());
    let timeout = Box::pin(TimeoutFuture::new(SUBMIT_TIMEOUT_MS));

    let response = match select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| SubmitError::Transport(e.to_string()))?,
        Either::Right(_) => return Err(SubmitError::Timeout),
    };

    let ok = response.ok();
    let status = response.status();
    let body = match response.json::<ContactResponse>().await {
        Ok(body) => Some(body),
        Err(e) => {
            log::warn!("Contact response with status {} was not JSON: {}", status, e);
            None
        }
    };
    interpret_response(ok, body)
}

/// Success needs both a 2xx status and `success: true` in the body.
pub fn interpret_response(ok: bool, body: Option<ContactResponse>) -> SubmitOutcome {
    match body {
        Some(body) if ok && body.success => Ok(body.message),
        Some(body) => Err(SubmitError::Rejected(body.message)),
        None => Err(SubmitError::Decode("response body is not a contact response".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::controller::FALLBACK_MESSAGE;
    use smartpos_shared::response::{GENERIC_ERROR_MESSAGE, SUCCESS_MESSAGE};

    #[test]
    fn accepted_response_is_success() {
        assert_eq!(
            interpret_response(true, Some(ContactResponse::accepted())),
            Ok(SUCCESS_MESSAGE.to_string())
        );
    }

    #[test]
    fn error_statuses_carry_the_server_message() {
        let outcome = interpret_response(false, Some(ContactResponse::failed()));
        assert_eq!(outcome, Err(SubmitError::Rejected(GENERIC_ERROR_MESSAGE.to_string())));
        assert_eq!(outcome.unwrap_err().user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn ok_status_with_unsuccessful_body_is_an_error() {
        let body = ContactResponse {
            success: false,
            message: "Validation error".to_string(),
            errors: None,
        };
        assert!(matches!(interpret_response(true, Some(body)), Err(SubmitError::Rejected(_))));
    }

    #[test]
    fn non_json_body_falls_back() {
        for ok in [true, false] {
            let error = interpret_response(ok, None).unwrap_err();
            assert_eq!(error.user_message(), FALLBACK_MESSAGE);
        }
    }
}
