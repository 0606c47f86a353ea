use maud::{html, Markup};

pub fn header() -> Markup {
    html! {
        header.header {
            nav.nav {
                div.logo { "BLACK SOCKS" }
                ul.nav-links {
                    li { a href="#home" { "Home" } }
                    li { a href="#products" { "Products" } }
                    li { a href="#about" { "About" } }
                    li { a href="#contact" { "Contact" } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_has_exactly_four_nav_links() {
        let rendered = header().into_string();

        for target in ["#home", "#products", "#about", "#contact"] {
            assert_eq!(
                rendered.matches(&format!("href=\"{}\"", target)).count(),
                1,
                "expected exactly one link to {}",
                target
            );
        }
        assert_eq!(rendered.matches("<a href=").count(), 4);
    }

    #[test]
    fn test_header_brand_label() {
        assert!(header().into_string().contains("BLACK SOCKS"));
    }
}
