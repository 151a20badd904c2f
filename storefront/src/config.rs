//! Storefront configuration.
//!
//! Defaults match the shop as it runs today; each value can be overridden
//! through an environment variable.

use crate::error::ConfigError;
use crate::types::Price;

/// Variable overriding [`StorefrontConfig::min_mobile_len`]
pub const MIN_MOBILE_LEN_VAR: &str = "JOOT_MIN_MOBILE_LEN";

/// Variable overriding [`StorefrontConfig::currency_symbol`]
pub const CURRENCY_SYMBOL_VAR: &str = "JOOT_CURRENCY_SYMBOL";

/// Configuration for the storefront boundary
///
/// # Example
///
/// ```
/// use joot_storefront::StorefrontConfig;
///
/// let config = StorefrontConfig::default().with_min_mobile_len(12);
/// assert_eq!(config.min_mobile_len, 12);
/// assert_eq!(config.currency_symbol, "₹");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Minimum number of characters in a checkout mobile number
    pub min_mobile_len: usize,
    /// Symbol placed before rendered prices
    pub currency_symbol: String,
}

impl StorefrontConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub fn new(min_mobile_len: usize, currency_symbol: impl Into<String>) -> Self {
        Self {
            min_mobile_len,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Set the minimum mobile number length
    #[must_use]
    pub const fn with_min_mobile_len(mut self, min_mobile_len: usize) -> Self {
        self.min_mobile_len = min_mobile_len;
        self
    }

    /// Set the currency symbol
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Unset keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a value is present but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MIN_MOBILE_LEN_VAR) {
            config.min_mobile_len = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: MIN_MOBILE_LEN_VAR,
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup(CURRENCY_SYMBOL_VAR) {
            if raw.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    key: CURRENCY_SYMBOL_VAR,
                    value: raw,
                });
            }
            config.currency_symbol = raw;
        }

        Ok(config)
    }

    /// Render a price with the configured currency symbol, e.g. `₹799`
    #[must_use]
    pub fn format_price(&self, price: Price) -> String {
        format!("{}{price}", self.currency_symbol)
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            min_mobile_len: 10,
            currency_symbol: "₹".to_string(),
        }
    }
}
