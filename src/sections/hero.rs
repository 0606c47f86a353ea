use maud::{html, Markup};

pub fn hero() -> Markup {
    html! {
        section.hero id="home" {
            div.hero-content {
                h1 { "Premium Black Socks" }
                p {
                    "Discover the perfect blend of comfort, style, and durability. "
                    "Our premium black socks are crafted for those who demand the best "
                    "in every step they take."
                }
                // Decorative call to action, no bound behavior.
                button.cta-button { "Shop Now" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_anchor_and_headline() {
        let rendered = hero().into_string();

        assert!(rendered.contains("id=\"home\""));
        assert!(rendered.contains("<h1>Premium Black Socks</h1>"));
        assert!(rendered.contains("Shop Now"));
    }
}
