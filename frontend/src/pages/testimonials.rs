use smartpos_shared::content::{testimonials, Testimonial, MAX_RATING, SOCIAL_PROOF_STATS};
use yew::prelude::*;

fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_RATING as usize - filled))
}

fn testimonial_card(t: &Testimonial) -> Html {
    html! {
        <div class="testimonial-card" key={t.id}>
            <div class="testimonial-rating" aria-label={format!("{} out of {}", t.rating, MAX_RATING)}>
                {stars(t.rating)}
            </div>
            <blockquote>{format!("\"{}\"", t.quote)}</blockquote>
            if let Some(highlight) = t.highlight {
                <div class="testimonial-highlight">{highlight}</div>
            }
            <div class="testimonial-author">
                <div class="author-initial">{t.initial().to_string()}</div>
                <div>
                    <div class="author-name">{t.name}</div>
                    <div class="author-business">{t.business}</div>
                    <div class="author-location">{t.location}</div>
                </div>
            </div>
            if let Some(link) = t.store_link {
                <a class="store-link" href={link} target="_blank" rel="noopener noreferrer">
                    {"View their online store"}
                </a>
            }
        </div>
    }
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    html! {
        <section id="testimonials" class="testimonials-section">
            <h2 class="testimonials-heading">{"Trusted by Shop Owners Across Kenya"}</h2>
            <div class="testimonials-grid">
                { for testimonials().iter().map(testimonial_card) }
            </div>
            <div class="stats-bar">
                { for SOCIAL_PROOF_STATS.iter().map(|(value, label)| html! {
                    <div class="stat">
                        <div class="stat-value">{*value}</div>
                        <div class="stat-label">{*label}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_up_to_the_rating() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
