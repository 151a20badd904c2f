//! Seed data: the product catalog and the wishlist.
//!
//! Neither changes at runtime. Screens look products up here and put copies
//! into actions.

use crate::types::{Price, Product, ProductId, WishlistEntry};

/// The fixed product catalog, in display order
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product::new(
            "jute-basket",
            "Jute Basket",
            Price(799),
            "Handwoven eco-friendly jute basket for storage and decor.",
        ),
        Product::new(
            "jute-carpet",
            "Jute Carpet",
            Price(1799),
            "Durable handcrafted jute carpet with natural fibers.",
        ),
        Product::new(
            "jute-coasters",
            "Jute Coasters",
            Price(299),
            "Set of handcrafted jute coasters for dining tables.",
        ),
        Product::new(
            "fruit-basket",
            "Fruit Basket",
            Price(649),
            "Natural jute fruit basket with breathable weave.",
        ),
    ]
}

/// Looks up a catalog product by id
#[must_use]
pub fn find_product(id: &ProductId) -> Option<Product> {
    products().into_iter().find(|product| &product.id == id)
}

/// Wishlist entries present at startup
#[must_use]
pub fn seed_wishlist() -> Vec<WishlistEntry> {
    vec![WishlistEntry {
        id: "coming-lamp".to_string(),
        name: "Jute Hanging Lamp".to_string(),
        eta: "Coming Next Week".to_string(),
    }]
}
