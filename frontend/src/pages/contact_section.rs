use smartpos_shared::company::CONTACT_INFO;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id="contact" class="contact-section">
            <h2>{"Get Your Free Demo"}</h2>
            <p class="section-subtitle">{"Fill out the form and we'll get back to you within 24 hours"}</p>
            <div class="contact-grid">
                <div class="contact-form-card">
                    <ContactForm />
                </div>
                <div class="contact-info-card">
                    <h3>{"Contact Information"}</h3>
                    <p>
                        <strong>{"Phone: "}</strong>
                        <a href={CONTACT_INFO.tel_href()}>{CONTACT_INFO.phone}</a>
                    </p>
                    <p>
                        <strong>{"WhatsApp: "}</strong>
                        <a href={CONTACT_INFO.whatsapp_url} target="_blank" rel="noopener">{CONTACT_INFO.whatsapp}</a>
                    </p>
                    <p>
                        <strong>{"Email: "}</strong>
                        <a href={CONTACT_INFO.mailto_href()}>{CONTACT_INFO.email}</a>
                    </p>
                    <p><strong>{"Location: "}</strong>{CONTACT_INFO.location}</p>
                    <p><strong>{"Hours: "}</strong>{CONTACT_INFO.hours}</p>
                </div>
            </div>
        </section>
    }
}
