//! Joot storefront: catalog, cart, checkout, order tracking and reviews.
//!
//! All storefront state lives in one [`StoreState`] value that changes only
//! through [`StoreAction`]s applied by [`StoreReducer`]. Screens read the state
//! through its query methods and build actions with the helpers in
//! [`checkout`].
//!
//! # Quick Start
//!
//! ```no_run
//! use joot_runtime::Store;
//! use joot_storefront::{
//!     catalog, checkout::{checkout, CheckoutForm}, ProductId, StoreAction, StoreReducer,
//!     StoreState, StorefrontConfig, StorefrontEnvironment,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(StoreState::new(), StoreReducer::new(), StorefrontEnvironment::system());
//!
//! if let Some(product) = catalog::find_product(&ProductId::from("jute-basket")) {
//!     store.send(StoreAction::AddToCart { product }).await?;
//! }
//!
//! let cart = store.state(|s| s.cart.clone()).await;
//! let action = checkout(
//!     CheckoutForm::new("Asha", "9876543210", "12 Lake Road"),
//!     &cart,
//!     store.environment(),
//!     &StorefrontConfig::default(),
//! )?;
//! store.send(action).await?;
//!
//! assert_eq!(store.state(StoreState::cart_item_count).await, 0);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use config::StorefrontConfig;
pub use error::{CheckoutError, ConfigError, ReviewError};
pub use reducer::{StoreReducer, StorefrontEnvironment};
pub use types::{
    format_rating, CartLine, Order, OrderId, OrderStatus, Price, Product, ProductId, Rating,
    Review, StoreAction, StoreState, WishlistEntry,
};
