//! Domain types for the storefront.
//!
//! Everything the storefront knows lives in [`StoreState`]: the cart, the
//! orders placed so far, product reviews and the wishlist. Catalog entries are
//! plain values copied into cart lines and orders, so a placed order never
//! changes when the cart does.

use crate::error::ReviewError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Amount in minor currency units
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u64);

impl Price {
    /// Returns the raw minor-unit amount
    #[must_use]
    pub const fn minor_units(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, qty: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(qty)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Stable catalog key, e.g. `jute-basket`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a product id from any string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Order identifier, supplied by whoever places the order
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Creates an order id from any string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A catalog entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: Price,
    /// Short description for the product page
    pub description: String,
}

impl Product {
    /// Creates a new product
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

/// One product in the cart with its quantity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product as it was when first added
    #[serde(flatten)]
    pub product: Product,
    /// Number of units, never zero
    pub qty: u32,
}

impl CartLine {
    /// Creates a line holding a single unit of `product`
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self { product, qty: 1 }
    }

    /// The line's identity
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.qty
    }
}

/// Star rating between 1 and 5
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating
    pub const MIN: u8 = 1;
    /// Highest accepted rating
    pub const MAX: u8 = 5;

    /// Creates a rating
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::RatingOutOfRange`] if `stars` is not in `1..=5`.
    pub const fn new(stars: u8) -> Result<Self, ReviewError> {
        if stars < Self::MIN || stars > Self::MAX {
            return Err(ReviewError::RatingOutOfRange(stars));
        }
        Ok(Self(stars))
    }

    /// The number of stars
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReviewError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A customer review of one product
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer name
    pub name: String,
    /// Star rating
    pub rating: Rating,
    /// Free-text comment
    pub comment: String,
    /// Date the review was written, e.g. `Fri Oct 16 2026`
    pub date: String,
}

/// Order lifecycle status
///
/// Orders are only ever created as `Confirmed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order accepted at checkout
    #[default]
    Confirmed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => f.write_str("Confirmed"),
        }
    }
}

/// A placed order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier used for tracking
    pub id: OrderId,
    /// Copy of the cart at checkout time
    pub items: Vec<CartLine>,
    /// Customer name
    pub name: String,
    /// Customer mobile number
    pub mobile: String,
    /// Delivery address
    pub address: String,
    /// Current status
    pub status: OrderStatus,
}

impl Order {
    /// Sum of the order's line totals
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartLine::line_total).sum()
    }
}

/// An upcoming product shown on the wishlist page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Availability note, e.g. `Coming Next Week`
    pub eta: String,
}

/// The storefront aggregate
///
/// Only [`StoreReducer`](crate::StoreReducer) writes to it; everything else
/// reads through the query methods below.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    /// Cart lines in the order they were first added
    pub cart: Vec<CartLine>,
    /// Orders in the order they were placed
    pub orders: Vec<Order>,
    /// Reviews per product, oldest first
    pub reviews: BTreeMap<ProductId, Vec<Review>>,
    /// Upcoming products
    pub wishlist: Vec<WishlistEntry>,
}

impl StoreState {
    /// Creates the startup state: nothing in the cart, no orders or reviews,
    /// and the seeded wishlist
    #[must_use]
    pub fn new() -> Self {
        Self {
            wishlist: crate::catalog::seed_wishlist(),
            ..Self::default()
        }
    }

    /// Cart lines in insertion order
    #[must_use]
    pub fn cart_lines(&self) -> &[CartLine] {
        &self.cart
    }

    /// Total number of units in the cart (the header badge)
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.cart
            .iter()
            .fold(0_u32, |count, line| count.saturating_add(line.qty))
    }

    /// Whether the cart holds nothing
    #[must_use]
    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of price times quantity over the cart
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart.iter().map(CartLine::line_total).sum()
    }

    /// Reviews for a product, oldest first
    #[must_use]
    pub fn reviews_for(&self, product_id: &ProductId) -> &[Review] {
        self.reviews
            .get(product_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Mean rating for a product, `0.0` when it has no reviews
    #[must_use]
    pub fn average_rating(&self, product_id: &ProductId) -> f64 {
        self.review_summary(product_id).1
    }

    /// Review count and mean rating for a product
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // counts and star sums stay far below 2^52
    pub fn review_summary(&self, product_id: &ProductId) -> (usize, f64) {
        let reviews = self.reviews_for(product_id);
        let stars: u64 = reviews
            .iter()
            .map(|review| u64::from(review.rating.stars()))
            .sum();
        let average = stars as f64 / reviews.len().max(1) as f64;
        (reviews.len(), average)
    }

    /// First order placed with `id`, if any
    #[must_use]
    pub fn find_order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    /// Upcoming products
    #[must_use]
    pub fn wishlist(&self) -> &[WishlistEntry] {
        &self.wishlist
    }
}

/// Renders an average rating the way the product page shows it, e.g. `4.0`
#[must_use]
pub fn format_rating(average: f64) -> String {
    format!("{average:.1}")
}

/// Transitions accepted by the storefront
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreAction {
    /// Add one unit of a product to the cart
    AddToCart {
        /// Product to add
        product: Product,
    },

    /// Drop a product's line from the cart
    RemoveItem {
        /// Product whose line is removed
        id: ProductId,
    },

    /// Record an order and empty the cart
    PlaceOrder {
        /// The order exactly as it should be stored
        order: Order,
    },

    /// Append a review to a product
    AddReview {
        /// Reviewed product
        product_id: ProductId,
        /// The review
        review: Review,
    },
}
