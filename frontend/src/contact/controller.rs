//! Contact form state machine.
//!
//! `Idle -> Submitting -> Success | Error -> Submitting -> ...`
//!
//! Nothing in here touches the browser. The form component feeds it
//! [`FormAction`]s through `use_reducer` and renders whatever it holds.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use smartpos_shared::{ContactForm, Field, ValidationFailure};
use thiserror::Error;
use yew::Reducible;

pub const FALLBACK_MESSAGE: &str =
    "Something went wrong. Please try again or contact us directly.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    /// Carries the server's confirmation message.
    Success(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("server rejected the submission: {0}")]
    Rejected(String),
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl SubmitError {
    /// Banner text. The server's own message wins when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected(message) if !message.trim().is_empty() => message.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// `Ok` carries the server's confirmation message.
pub type SubmitOutcome = Result<String, SubmitError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    InFlight,
    Invalid(ValidationFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Edit(Field, String),
    Rejected(ValidationFailure),
    Submit,
    Finished(SubmitOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormController {
    fields: ContactForm,
    field_errors: BTreeMap<Field, String>,
    status: SubmitStatus,
}

impl FormController {
    pub fn fields(&self) -> &ContactForm {
        &self.fields
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.field_errors.remove(&field);
    }

    /// The payload to send, or why nothing should be sent.
    pub fn prepare_submit(&self) -> Result<ContactForm, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        self.fields
            .validate_submission()
            .map(|_| self.fields.clone())
            .map_err(SubmitBlocked::Invalid)
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => self.set_field(field, value),
            FormAction::Rejected(failure) => {
                self.field_errors = failure
                    .errors()
                    .iter()
                    .map(|e| (e.field, e.message.clone()))
                    .collect();
            }
            FormAction::Submit => {
                if !self.is_submitting() {
                    self.status = SubmitStatus::Submitting;
                    self.field_errors.clear();
                }
            }
            // a result with no request outstanding is stale
            FormAction::Finished(_) if !self.is_submitting() => {}
            FormAction::Finished(Ok(message)) => {
                self.fields = ContactForm::default();
                self.status = SubmitStatus::Success(message);
            }
            FormAction::Finished(Err(error)) => {
                log::warn!("Contact submission failed: {}", error);
                self.status = SubmitStatus::Error(error.user_message());
            }
        }
    }
}

/// At most one request in flight per form.
///
/// The component reads the controller from a render-time snapshot, so two
/// submits before the next render would both pass `prepare_submit`. The gate
/// is shared state that the second one sees.
#[derive(Debug, Clone, Default)]
pub struct SubmitGate(Rc<Cell<bool>>);

impl SubmitGate {
    pub fn try_acquire(&self) -> Option<SubmitTicket> {
        if self.0.replace(true) {
            return None;
        }
        Some(SubmitTicket(self.0.clone()))
    }

    pub fn is_open(&self) -> bool {
        !self.0.get()
    }
}

/// Held for the life of one request. Dropping it reopens the gate.
#[derive(Debug)]
pub struct SubmitTicket(Rc<Cell<bool>>);

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Reducible for FormController {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormController {
        let mut controller = FormController::default();
        controller.apply(FormAction::Edit(Field::Name, "John Doe".into()));
        controller.apply(FormAction::Edit(Field::BusinessName, "My Shop".into()));
        controller.apply(FormAction::Edit(Field::Phone, "0712345678".into()));
        controller.apply(FormAction::Edit(Field::Message, "I would like a demo please.".into()));
        controller
    }

    fn submit(controller: &mut FormController) -> ContactForm {
        let payload = controller.prepare_submit().expect("form should be valid");
        controller.apply(FormAction::Submit);
        payload
    }

    #[test]
    fn starts_idle_and_empty() {
        let controller = FormController::default();
        assert_eq!(controller.status(), &SubmitStatus::Idle);
        assert_eq!(controller.fields(), &ContactForm::default());
        assert!(!controller.is_submitting());
    }

    #[test]
    fn success_clears_fields() {
        let mut controller = filled();
        let payload = submit(&mut controller);
        assert_eq!(payload.name, "John Doe");
        assert!(controller.is_submitting());

        controller.apply(FormAction::Finished(Ok(
            "Thank you for your message! We will get back to you soon.".into(),
        )));
        assert_eq!(
            controller.status(),
            &SubmitStatus::Success("Thank you for your message! We will get back to you soon.".into())
        );
        assert_eq!(controller.fields(), &ContactForm::default());
        assert!(!controller.is_submitting());
    }

    #[test]
    fn local_validation_blocks_the_request() {
        let mut controller = filled();
        controller.apply(FormAction::Edit(Field::Phone, "123".into()));

        let blocked = controller.prepare_submit().unwrap_err();
        let SubmitBlocked::Invalid(failure) = blocked else {
            panic!("expected invalid form");
        };
        controller.apply(FormAction::Rejected(failure));

        assert_eq!(controller.status(), &SubmitStatus::Idle);
        assert!(controller.field_error(Field::Phone).is_some());
        assert_eq!(controller.field_error(Field::Name), None);

        controller.apply(FormAction::Edit(Field::Phone, "0712345678".into()));
        assert_eq!(controller.field_error(Field::Phone), None);
        assert!(controller.prepare_submit().is_ok());
    }

    #[test]
    fn refuses_second_submit_while_in_flight() {
        let mut controller = filled();
        submit(&mut controller);
        assert_eq!(controller.prepare_submit(), Err(SubmitBlocked::InFlight));

        controller.apply(FormAction::Submit);
        assert!(controller.is_submitting());
    }

    #[test]
    fn server_rejection_shows_server_message_and_keeps_fields() {
        let mut controller = filled();
        submit(&mut controller);
        controller.apply(FormAction::Finished(Err(SubmitError::Rejected(
            "Validation error".into(),
        ))));

        assert_eq!(
            controller.status(),
            &SubmitStatus::Error("Validation error".into())
        );
        assert_eq!(controller.fields().name, "John Doe");
        assert!(!controller.is_submitting());
    }

    #[test]
    fn transport_failure_uses_fallback_and_reenables_submit() {
        let mut controller = filled();
        submit(&mut controller);
        controller.apply(FormAction::Finished(Err(SubmitError::Transport(
            "Failed to fetch".into(),
        ))));

        assert_eq!(
            controller.status(),
            &SubmitStatus::Error(FALLBACK_MESSAGE.into())
        );
        assert!(!controller.is_submitting());
        assert!(controller.prepare_submit().is_ok());
    }

    #[test]
    fn can_resubmit_after_error() {
        let mut controller = filled();
        submit(&mut controller);
        controller.apply(FormAction::Finished(Err(SubmitError::Timeout)));

        submit(&mut controller);
        assert_eq!(controller.status(), &SubmitStatus::Submitting);
        controller.apply(FormAction::Finished(Ok("Thanks".into())));
        assert_eq!(controller.status(), &SubmitStatus::Success("Thanks".into()));
    }

    #[test]
    fn ignores_stale_results() {
        let mut controller = filled();
        controller.apply(FormAction::Finished(Ok(String::new())));
        assert_eq!(controller.status(), &SubmitStatus::Idle);
        assert_eq!(controller.fields().name, "John Doe");
    }

    #[test]
    fn gate_admits_one_request_at_a_time() {
        let gate = SubmitGate::default();
        let first = gate.try_acquire().expect("gate starts open");
        assert!(!gate.is_open());

        // a second handle from the same render still sees the request
        let snapshot = gate.clone();
        assert!(snapshot.try_acquire().is_none());

        drop(first);
        assert!(gate.is_open());
        assert!(snapshot.try_acquire().is_some());
        assert!(gate.is_open());
    }

    #[test]
    fn blank_server_message_falls_back() {
        assert_eq!(SubmitError::Rejected("  ".into()).user_message(), FALLBACK_MESSAGE);
        assert_eq!(SubmitError::Decode("eof".into()).user_message(), FALLBACK_MESSAGE);
        assert_eq!(SubmitError::Rejected("Nope".into()).user_message(), "Nope");
    }

    #[test]
    fn reducer_produces_new_state() {
        let before = Rc::new(filled());
        let after = before.clone().reduce(FormAction::Edit(Field::Email, "a@b.co".into()));
        assert_eq!(before.fields().email, "");
        assert_eq!(after.fields().email, "a@b.co");
    }
}
