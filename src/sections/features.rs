use maud::{html, Markup};

// Similar in shape to the product catalog, but the content shares no data
// source with it, so the two stay separate.
const FEATURES: [(&str, &str, &str); 6] = [
    (
        "🧦",
        "Premium Materials",
        "Crafted from the finest cotton and bamboo fibers for ultimate comfort and breathability.",
    ),
    (
        "💎",
        "Superior Quality",
        "Each pair is meticulously designed and tested to ensure long-lasting durability and comfort.",
    ),
    (
        "🎯",
        "Perfect Fit",
        "Available in multiple sizes with engineered support zones for the perfect fit every time.",
    ),
    (
        "♻️",
        "Sustainable",
        "Made with eco-friendly materials and sustainable manufacturing processes for a better tomorrow.",
    ),
    (
        "🚚",
        "Fast Shipping",
        "Free worldwide shipping on orders over $50. Get your premium socks delivered to your door.",
    ),
    (
        "🏆",
        "Satisfaction Guaranteed",
        "30-day money-back guarantee. If you're not satisfied, we'll make it right.",
    ),
];

pub fn features() -> Markup {
    html! {
        section.features id="about" {
            div.features-content {
                h2 { "Why Choose Black Socks?" }
                div.features-grid {
                    @for (icon, title, description) in FEATURES {
                        div.feature-card {
                            div.feature-icon { (icon) }
                            h3 { (title) }
                            p { (description) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_renders_exactly_six_cards() {
        let rendered = features().into_string();
        assert_eq!(rendered.matches("class=\"feature-card\"").count(), 6);
    }

    #[test]
    fn test_features_anchor_and_titles() {
        let rendered = features().into_string();

        assert!(rendered.contains("id=\"about\""));
        for (_, title, _) in FEATURES {
            assert!(rendered.contains(title), "missing feature: {}", title);
        }
    }
}
