use smartpos_shared::company::CONTACT_INFO;
use smartpos_shared::plans::plan_options;
use smartpos_shared::Field;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::api;
use crate::contact::controller::{FormAction, FormController, SubmitBlocked, SubmitGate, SubmitStatus};

const SUCCESS_FOLLOW_UP: &str = "We'll get back to you within 24 hours.";

fn on_input(controller: &UseReducerHandle<FormController>, field: Field) -> Callback<InputEvent> {
    let controller = controller.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        controller.dispatch(FormAction::Edit(field, input.value()));
    })
}

fn field_error(controller: &FormController, field: Field) -> Html {
    match controller.field_error(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let controller = use_reducer(FormController::default);
    let gate = use_state(SubmitGate::default);

    let onsubmit = {
        let controller = controller.clone();
        let gate = (*gate).clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(ticket) = gate.try_acquire() else {
                return;
            };
            match controller.prepare_submit() {
                Err(SubmitBlocked::InFlight) => {}
                Err(SubmitBlocked::Invalid(failure)) => {
                    controller.dispatch(FormAction::Rejected(failure));
                }
                Ok(form) => {
                    controller.dispatch(FormAction::Submit);
                    let controller = controller.clone();
                    spawn_local(async move {
                        let outcome = api::submit_contact(&form).await;
                        controller.dispatch(FormAction::Finished(outcome));
                        drop(ticket);
                    });
                }
            }
        })
    };

    let on_message = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            controller.dispatch(FormAction::Edit(Field::Message, input.value()));
        })
    };

    let on_plan = {
        let controller = controller.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            controller.dispatch(FormAction::Edit(Field::InterestedPlan, select.value()));
        })
    };

    let fields = controller.fields().clone();
    let submitting = controller.is_submitting();

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-field">
                <label for="name">{"Your Name *"}</label>
                <input id="name" type="text" placeholder="John Doe"
                    value={fields.name.clone()}
                    oninput={on_input(&controller, Field::Name)} />
                { field_error(&controller, Field::Name) }
            </div>

            <div class="form-field">
                <label for="businessName">{"Business Name *"}</label>
                <input id="businessName" type="text" placeholder="My Shop Ltd"
                    value={fields.business_name.clone()}
                    oninput={on_input(&controller, Field::BusinessName)} />
                { field_error(&controller, Field::BusinessName) }
            </div>

            <div class="form-field">
                <label for="phone">{"Phone Number *"}</label>
                <input id="phone" type="tel" placeholder="0712345678 or +254712345678"
                    value={fields.phone.clone()}
                    oninput={on_input(&controller, Field::Phone)} />
                { field_error(&controller, Field::Phone) }
            </div>

            <div class="form-field">
                <label for="email">{"Email (Optional)"}</label>
                <input id="email" type="email" placeholder="john@example.com"
                    value={fields.email.clone()}
                    oninput={on_input(&controller, Field::Email)} />
                { field_error(&controller, Field::Email) }
            </div>

            <div class="form-field">
                <label for="interestedPlan">{"Interested Plan (Optional)"}</label>
                <select id="interestedPlan" onchange={on_plan}>
                    <option value="" selected={fields.interested_plan.is_empty()}>{"Select a plan"}</option>
                    { for plan_options().into_iter().map(|(label, value)| html! {
                        <option value={value} selected={fields.interested_plan == value}>{label}</option>
                    }) }
                </select>
            </div>

            <div class="form-field">
                <label for="message">{"Message *"}</label>
                <textarea id="message" rows="5"
                    placeholder="Tell us about your business and how we can help..."
                    value={fields.message.clone()}
                    oninput={on_message} />
                { field_error(&controller, Field::Message) }
            </div>

            <button type="submit" class="submit-button" disabled={submitting}>
                if submitting {
                    <span class="loading-spinner"></span>{" Sending..."}
                } else {
                    {"Send Message"}
                }
            </button>

            {
                match controller.status() {
                    SubmitStatus::Success(message) => html! {
                        <div class="form-banner success">
                            <p class="banner-title">{"Message sent successfully!"}</p>
                            if !message.trim().is_empty() {
                                <p>{message}</p>
                            }
                            <p>{SUCCESS_FOLLOW_UP}</p>
                        </div>
                    },
                    SubmitStatus::Error(message) => html! {
                        <div class="form-banner error">
                            <p class="banner-title">{"Failed to send message"}</p>
                            <p>{message}</p>
                            <p>
                                {"You can also reach us directly at: "}
                                <a href={CONTACT_INFO.tel_href()}>{CONTACT_INFO.phone}</a>
                            </p>
                        </div>
                    },
                    SubmitStatus::Idle | SubmitStatus::Submitting => html! {},
                }
            }
        </form>
    }
}
