//! Error types for the storefront boundary.
//!
//! The reducer itself cannot fail. These errors come from turning user input
//! into actions and from loading configuration.

use thiserror::Error;

/// Checkout form rejected before an order was built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The mobile number is shorter than the configured minimum
    #[error("Invalid mobile")]
    InvalidMobile {
        /// Minimum number of characters required
        min_len: usize,
        /// Number of characters supplied
        actual_len: usize,
    },
}

/// Review input rejected before a review was built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// Star rating outside 1..=5
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// Configuration could not be loaded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse
    #[error("Invalid value {value:?} for {key}")]
    Invalid {
        /// Variable name
        key: &'static str,
        /// Raw value found
        value: String,
    },
}
