use maud::{html, Markup, DOCTYPE};

mod header;

pub use header::header;

pub struct SeoMeta {
    pub title: String,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: "Black Socks - Premium Quality Socks".to_string(),
            description: Some(
                "Discover our premium collection of black socks. Comfortable, durable, and stylish socks for every occasion.".to_string(),
            ),
            keywords: Some(
                "black socks, premium socks, comfortable socks, dress socks, casual socks".to_string(),
            ),
        }
    }
}

impl SeoMeta {
    pub fn render(&self) -> Markup {
        let description = self
            .description
            .clone()
            .unwrap_or_else(|| SeoMeta::default().description.unwrap());

        html! {
            title { (self.title) }
            meta name="description" content=(description);
            @if let Some(keywords) = &self.keywords {
                meta name="keywords" content=(keywords);
            }

            // Open Graph meta tags
            meta property="og:title" content=(self.title);
            meta property="og:description" content=(description);
            meta property="og:type" content="website";

            // Twitter Card meta tags
            meta name="twitter:card" content="summary";
            meta name="twitter:title" content=(self.title);
            meta name="twitter:description" content=(description);
        }
    }
}

/// Wraps a page body in the full HTML document.
pub fn layout(main: Markup, seo: Option<SeoMeta>) -> Markup {
    let seo_data = seo.unwrap_or_default();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                link rel="stylesheet" href="/assets/styles.css";
                (seo_data.render())
            }
            body {
                main {
                    (main)
                }
            }
        }
    }
}
