use smartpos_shared::content::faqs;
use yew::prelude::*;

/// Clicking the open question closes it. Any other click opens that one.
fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state(|| Some(0usize));

    html! {
        <section id="faq" class="faq-section">
            <h2 class="faq-heading">{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for faqs().iter().enumerate().map(|(index, entry)| {
                    let is_open = *open == Some(index);
                    let onclick = {
                        let open = open.clone();
                        Callback::from(move |_: MouseEvent| open.set(toggle(*open, index)))
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then(|| "open"))}>
                            <button class="faq-question" {onclick}>
                                <span>{entry.question}</span>
                                <span class="faq-icon">{ if is_open { "−" } else { "+" } }</span>
                            </button>
                            if is_open {
                                <p class="faq-answer">{entry.answer}</p>
                            }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_opens_one_question_at_a_time() {
        assert_eq!(toggle(Some(0), 0), None);
        assert_eq!(toggle(Some(0), 3), Some(3));
        assert_eq!(toggle(None, 2), Some(2));
    }
}
