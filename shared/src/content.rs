//! Static copy for the FAQ and testimonial sections.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub business: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
    /// Out of five.
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_link: Option<&'static str>,
}

impl Testimonial {
    /// First letter of the name, shown in place of a photo.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const MAX_RATING: u8 = 5;

static FAQS: [FaqEntry; 9] = [
    FaqEntry {
        question: "How long does it take to set up Smart POS?",
        answer: "We can have your system up and running within 24 hours. This includes installation, initial product setup, and basic training for you and your staff. We handle everything remotely or can visit your shop in Nairobi.",
    },
    FaqEntry {
        question: "Does Smart POS work with M-Pesa?",
        answer: "Yes! Smart POS fully integrates with M-Pesa for seamless mobile money payments. You can also accept cash, bank transfers, and offer credit to trusted customers, all tracked in one system.",
    },
    FaqEntry {
        question: "Can I use Smart POS for both retail and wholesale?",
        answer: "Absolutely. Our dual-pricing mode lets you set different prices for retail and wholesale customers on the same products. Switch between modes instantly during checkout.",
    },
    FaqEntry {
        question: "What makes the AI features different from regular reports?",
        answer: "Unlike static reports, our AI analyzes your data and gives you actionable insights in plain language. It automatically generates daily summaries at closing time, identifies trends, and even answers questions like \"Which products made the most profit this week?\"",
    },
    FaqEntry {
        question: "Do I need internet to use Smart POS?",
        answer: "Smart POS works best with internet for real-time sync and AI features. However, the core POS functions can work offline, and data syncs automatically when you reconnect.",
    },
    FaqEntry {
        question: "Is my business data secure?",
        answer: "Yes. All data is encrypted and stored securely. We offer both cloud-hosted and self-hosted options. With self-hosting, you maintain complete control over your data with no vendor lock-in.",
    },
    FaqEntry {
        question: "Can I try before I buy?",
        answer: "Yes! We offer a free live demo at demopos.munene.shop where you can explore all features. We also provide a 30-day money-back guarantee on all plans.",
    },
    FaqEntry {
        question: "What kind of support do you offer?",
        answer: "All plans include email support. Business and Enterprise plans include phone and WhatsApp support. Enterprise customers get a dedicated account manager and 24/7 priority support.",
    },
    FaqEntry {
        question: "Do you offer AI consulting for other business needs?",
        answer: "Yes! Beyond Smart POS, we help businesses understand and implement AI automation for various manual tasks. We cut through the hype and provide practical solutions that actually save you time and money.",
    },
];

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: "john-smart-traders",
        name: "John",
        business: "Smart Traders",
        location: "Kagio",
        quote: "Smart POS transformed how I run my shop. The daily AI reports save me hours of manual work, and I can now see exactly where my profit is coming from. The dual pricing for retail and wholesale customers is a game-changer.",
        rating: 5,
        highlight: Some("Saved 3+ hours daily on manual reporting"),
        store_link: Some("https://store.munene.shop"),
    },
    Testimonial {
        id: "mary-wholesale",
        name: "Mary W.",
        business: "Mama Mary Wholesale",
        location: "Nakuru",
        quote: "I was skeptical about AI at first, but the conversational assistant is incredible. I just ask \"what sold best this week?\" and get instant answers. My staff loves how easy it is to use.",
        rating: 5,
        highlight: Some("Reduced stock-outs by 60%"),
        store_link: None,
    },
    Testimonial {
        id: "pk-electronics",
        name: "Peter K.",
        business: "PK Electronics",
        location: "Mombasa",
        quote: "The credit management feature alone paid for the subscription. I now have clear visibility on who owes what, and the automated reminders have improved my collections significantly.",
        rating: 5,
        highlight: Some("Improved debt collection by 40%"),
        store_link: None,
    },
];

/// Headline figures under the testimonials, as `(value, label)`.
pub const SOCIAL_PROOF_STATS: [(&str, &str); 4] = [
    ("50+", "Active Shops"),
    ("10K+", "Daily Transactions"),
    ("98%", "Customer Satisfaction"),
    ("24hr", "Setup Time"),
];

pub fn faqs() -> &'static [FaqEntry] {
    &FAQS
}

pub fn testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn faq_copy_is_filled_in() {
        assert!(!faqs().is_empty());
        for entry in faqs() {
            assert!(entry.question.ends_with('?'), "{}", entry.question);
            assert!(!entry.answer.trim().is_empty());
        }
    }

    #[test]
    fn testimonials_have_unique_ids_and_valid_ratings() {
        let ids: HashSet<_> = testimonials().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), testimonials().len());
        assert!(testimonials().iter().all(|t| (1..=MAX_RATING).contains(&t.rating)));
    }

    #[test]
    fn initial_is_first_letter_of_name() {
        let initials: Vec<char> = testimonials().iter().map(Testimonial::initial).collect();
        assert_eq!(initials, vec!['J', 'M', 'P']);
    }

    #[test]
    fn store_link_only_serialized_when_present() {
        let json = serde_json::to_value(&testimonials()[0]).unwrap();
        assert_eq!(json["storeLink"], "https://store.munene.shop");
        let json = serde_json::to_value(&testimonials()[1]).unwrap();
        assert!(json.get("storeLink").is_none());
    }
}
