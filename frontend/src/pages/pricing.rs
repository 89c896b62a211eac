use smartpos_shared::plans::{format_price, pricing_plans, PlanPrice, PricingPlan};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    id: &'static str,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let Some(plan) = pricing_plans().iter().find(|p| p.id == props.id) else {
        return html! {};
    };
    let PricingPlan { name, price, currency, period, description, features, highlighted, badge, cta, .. } = plan;

    html! {
        <div class={classes!("pricing-card", highlighted.then(|| "highlighted"))}>
            if let Some(badge) = badge {
                <span class="pricing-badge">{*badge}</span>
            }
            <h3>{*name}</h3>
            <p class="plan-description">{*description}</p>
            <div class="plan-price">
                <span class="amount">{format_price(*price, currency)}</span>
                if matches!(price, PlanPrice::Amount(_)) {
                    <span class="period">{format!("/{}", period)}</span>
                }
            </div>
            <ul class="plan-features">
                { for features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <a class="pricing-cta" href={cta.href}>{cta.text}</a>
        </div>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    html! {
        <section id="pricing" class="pricing-section">
            <h2 class="pricing-heading">{"Simple, Transparent Pricing"}</h2>
            <p class="section-subtitle">{"No hidden fees. Setup and training included on every plan."}</p>
            <div class="pricing-grid">
                { for pricing_plans().iter().map(|plan| html! { <PlanCard id={plan.id} /> }) }
            </div>
        </section>
    }
}
