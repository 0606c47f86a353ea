use maud::{html, Markup};

pub fn footer() -> Markup {
    html! {
        footer.footer id="contact" {
            div.footer-content {
                ul.footer-links {
                    li { a href="#privacy" { "Privacy Policy" } }
                    li { a href="#terms" { "Terms of Service" } }
                    li { a href="#shipping" { "Shipping Info" } }
                    li { a href="#returns" { "Returns" } }
                    li { a href="#support" { "Support" } }
                }
                p {
                    "© 2024 Black Socks. All rights reserved. Premium socks for every step of your journey."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_has_exactly_five_links() {
        let rendered = footer().into_string();

        for target in ["#privacy", "#terms", "#shipping", "#returns", "#support"] {
            assert_eq!(
                rendered.matches(&format!("href=\"{}\"", target)).count(),
                1,
                "expected exactly one link to {}",
                target
            );
        }
        assert_eq!(rendered.matches("<a href=").count(), 5);
    }

    #[test]
    fn test_footer_anchor_and_copyright() {
        let rendered = footer().into_string();

        assert!(rendered.contains("id=\"contact\""));
        assert!(rendered.contains("© 2024 Black Socks"));
    }
}
