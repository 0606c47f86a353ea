//! The product catalog.
//!
//! The catalog is a fixed literal: products are never created, updated, or
//! deleted at runtime, and display order is definition order.

pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    /// Pre-formatted currency string, e.g. `$24.99`.
    pub price: &'static str,
}

pub static PRODUCTS: [Product; 6] = [
    Product {
        name: "Classic Black Dress Socks",
        description: "Perfect for business and formal occasions",
        price: "$24.99",
    },
    Product {
        name: "Athletic Black Socks",
        description: "Moisture-wicking technology for active lifestyles",
        price: "$19.99",
    },
    Product {
        name: "Luxury Merino Wool Socks",
        description: "Premium merino wool for ultimate comfort",
        price: "$34.99",
    },
    Product {
        name: "Bamboo Black Socks",
        description: "Eco-friendly bamboo fiber, naturally antibacterial",
        price: "$27.99",
    },
    Product {
        name: "Compression Black Socks",
        description: "Medical-grade compression for better circulation",
        price: "$29.99",
    },
    Product {
        name: "No-Show Black Socks",
        description: "Invisible comfort for casual and athletic wear",
        price: "$16.99",
    },
];
