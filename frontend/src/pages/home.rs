use smartpos_shared::company::CONTACT_INFO;
use yew::prelude::*;

use crate::pages::contact_section::ContactSection;
use crate::pages::faq::FaqSection;
use crate::pages::pricing::PricingSection;
use crate::pages::testimonials::TestimonialsSection;

const DEMO_URL: &str = "https://demopos.munene.shop";

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <h1>{"The AI-Powered Point of Sale That Handles the Numbers While You Grow Your Business"}</h1>
            <p class="hero-subtitle">
                {"Automated daily reports, real-time M-Pesa sales, and smart inventory insights. Built for Kenyan dukas, big and small."}
            </p>
            <div class="hero-cta">
                <a class="cta-primary" href={DEMO_URL} target="_blank" rel="noopener">{"Try Live Demo"}</a>
                <a class="cta-outline" href={CONTACT_INFO.whatsapp_url} target="_blank" rel="noopener">{"Chat on WhatsApp"}</a>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <Hero />
            <PricingSection />
            <TestimonialsSection />
            <FaqSection />
            <ContactSection />
        </main>
    }
}
