use maud::{html, Markup};

use crate::catalog::{Product, PRODUCTS};

pub fn showcase() -> Markup {
    html! {
        section.showcase id="products" {
            div.showcase-content {
                h2 { "Our Premium Collection" }
                p {
                    "From business meetings to weekend adventures, we have the perfect "
                    "black socks for every occasion."
                }
                (product_grid(&PRODUCTS))
            }
        }
    }
}

/// Renders one card per product, in catalog order.
///
/// The element id is derived from the position in the catalog and only serves
/// as a rendering key, not as a domain identifier.
pub fn product_grid(products: &[Product]) -> Markup {
    html! {
        div.product-grid {
            @for (index, product) in products.iter().enumerate() {
                div.product-card id=(format!("product-{}", index)) {
                    div.product-image { "🧦" }
                    div.product-info {
                        h3 { (product.name) }
                        p { (product.description) }
                        div.price { (product.price) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(count: usize) -> Vec<Product> {
        (0..count)
            .map(|index| Product {
                name: match index {
                    0 => "First",
                    1 => "Second",
                    _ => "Later",
                },
                description: "A sample product",
                price: "$9.99",
            })
            .collect()
    }

    #[test]
    fn test_empty_catalog_yields_empty_grid() {
        let rendered = product_grid(&[]).into_string();

        assert_eq!(rendered, "<div class=\"product-grid\"></div>");
    }

    #[test]
    fn test_single_product_yields_single_card() {
        let products = sample(1);
        let rendered = product_grid(&products).into_string();

        assert_eq!(rendered.matches("class=\"product-card\"").count(), 1);
        assert!(rendered.contains("<h3>First</h3>"));
        assert!(rendered.contains("<p>A sample product</p>"));
        assert!(rendered.contains("$9.99"));
    }

    #[test]
    fn test_cards_preserve_catalog_order() {
        let rendered = product_grid(&PRODUCTS).into_string();

        assert_eq!(rendered.matches("class=\"product-card\"").count(), PRODUCTS.len());

        let mut last = 0;
        for product in &PRODUCTS {
            let position = rendered[last..]
                .find(product.name)
                .expect("product name missing or out of order");
            last += position;
        }
    }

    #[test]
    fn test_each_name_and_price_appears_exactly_once() {
        let rendered = showcase().into_string();

        for product in &PRODUCTS {
            assert_eq!(rendered.matches(product.name).count(), 1, "{}", product.name);
            assert_eq!(rendered.matches(product.price).count(), 1, "{}", product.price);
        }
    }

    #[test]
    fn test_display_keys_follow_catalog_index() {
        let rendered = product_grid(&PRODUCTS).into_string();

        for index in 0..PRODUCTS.len() {
            assert!(rendered.contains(&format!("id=\"product-{}\"", index)));
        }
    }
}
