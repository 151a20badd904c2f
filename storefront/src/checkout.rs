//! Turning form input into storefront actions.
//!
//! The reducer trusts its payloads. The helpers here sit in front of it: they
//! validate what a customer typed, stamp ids and dates from the environment,
//! and hand back an action ready to send. A rejected form produces no action.

use crate::config::StorefrontConfig;
use crate::error::CheckoutError;
use crate::reducer::StorefrontEnvironment;
use crate::types::{CartLine, Order, OrderId, OrderStatus, ProductId, Rating, Review, StoreAction};

/// Review dates look like `Fri Oct 16 2026`
const REVIEW_DATE_FORMAT: &str = "%a %b %d %Y";

/// Customer details collected on the checkout page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    /// Customer name
    pub name: String,
    /// Mobile number, as typed
    pub mobile: String,
    /// Delivery address
    pub address: String,
}

impl CheckoutForm {
    /// Creates a filled-in form
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        mobile: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
            address: address.into(),
        }
    }

    /// Checks the form against the configured rules
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidMobile`] if the mobile number has fewer
    /// than `config.min_mobile_len` characters.
    pub fn validate(&self, config: &StorefrontConfig) -> Result<(), CheckoutError> {
        let actual_len = self.mobile.chars().count();
        if actual_len < config.min_mobile_len {
            return Err(CheckoutError::InvalidMobile {
                min_len: config.min_mobile_len,
                actual_len,
            });
        }
        Ok(())
    }
}

/// Builds the `PlaceOrder` action for the current cart
///
/// The order gets a fresh id from `env.ids`, a copy of `cart`, and status
/// `Confirmed`. An empty cart is not rejected.
///
/// # Errors
///
/// Returns the validation error from [`CheckoutForm::validate`]; no id is
/// drawn in that case.
pub fn checkout(
    form: CheckoutForm,
    cart: &[CartLine],
    env: &StorefrontEnvironment,
    config: &StorefrontConfig,
) -> Result<StoreAction, CheckoutError> {
    if let Err(error) = form.validate(config) {
        tracing::info!(%error, "Checkout rejected");
        return Err(error);
    }

    let order = Order {
        id: OrderId::new(env.ids.next_id()),
        items: cart.to_vec(),
        name: form.name,
        mobile: form.mobile,
        address: form.address,
        status: OrderStatus::Confirmed,
    };

    Ok(StoreAction::PlaceOrder { order })
}

/// Review input collected on the product page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewForm {
    /// Reviewer name
    pub name: String,
    /// Star rating, preselected to 5
    pub rating: Rating,
    /// Free-text comment
    pub comment: String,
}

impl ReviewForm {
    /// Creates a filled-in form
    #[must_use]
    pub fn new(name: impl Into<String>, rating: Rating, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating,
            comment: comment.into(),
        }
    }
}

/// Builds the `AddReview` action, dating the review from `env.clock`
#[must_use]
pub fn submit_review(
    product_id: ProductId,
    form: ReviewForm,
    env: &StorefrontEnvironment,
) -> StoreAction {
    let review = Review {
        name: form.name,
        rating: form.rating,
        comment: form.comment,
        date: env.clock.now().format(REVIEW_DATE_FORMAT).to_string(),
    };

    StoreAction::AddReview { product_id, review }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Price, Product};
    use joot_testing::{test_clock, SequentialIdGenerator};
    use std::sync::Arc;

    fn create_test_env() -> StorefrontEnvironment {
        StorefrontEnvironment::new(
            Arc::new(test_clock()),
            Arc::new(SequentialIdGenerator::new("order")),
        )
    }

    fn cart() -> Vec<CartLine> {
        vec![CartLine {
            product: Product::new("jute-basket", "Jute Basket", Price(799), ""),
            qty: 2,
        }]
    }

    #[test]
    fn short_mobile_is_rejected() {
        let form = CheckoutForm::new("A", "12345", "X");

        let result = checkout(form, &cart(), &create_test_env(), &StorefrontConfig::default());

        assert_eq!(
            result,
            Err(CheckoutError::InvalidMobile {
                min_len: 10,
                actual_len: 5,
            })
        );
    }

    #[test]
    fn rejection_message_is_user_facing() {
        let error = CheckoutForm::new("A", "", "X")
            .validate(&StorefrontConfig::default())
            .err()
            .map(|e| e.to_string());
        assert_eq!(error.as_deref(), Some("Invalid mobile"));
    }

    #[test]
    fn ten_character_mobile_is_accepted() {
        let form = CheckoutForm::new("A", "9999999999", "X");
        assert_eq!(form.validate(&StorefrontConfig::default()), Ok(()));
    }

    #[test]
    fn configured_minimum_is_honored() {
        let config = StorefrontConfig::default().with_min_mobile_len(12);
        let form = CheckoutForm::new("A", "9999999999", "X");
        assert!(form.validate(&config).is_err());
    }

    #[test]
    fn checkout_builds_confirmed_order_with_snapshot() {
        let env = create_test_env();
        let form = CheckoutForm::new("A", "9999999999", "X");

        let action = checkout(form, &cart(), &env, &StorefrontConfig::default());

        let Ok(StoreAction::PlaceOrder { order }) = action else {
            unreachable!("valid form must produce PlaceOrder");
        };
        assert_eq!(order.id, OrderId::from("order-1"));
        assert_eq!(order.items, cart());
        assert_eq!(order.name, "A");
        assert_eq!(order.mobile, "9999999999");
        assert_eq!(order.address, "X");
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.total(), Price(1598));
    }

    #[test]
    fn rejected_checkout_draws_no_id() {
        let env = create_test_env();
        let config = StorefrontConfig::default();

        let rejected = checkout(CheckoutForm::new("A", "1", "X"), &cart(), &env, &config);
        assert!(rejected.is_err());

        let accepted = checkout(CheckoutForm::new("A", "9999999999", "X"), &cart(), &env, &config);
        assert!(matches!(
            accepted,
            Ok(StoreAction::PlaceOrder { ref order }) if order.id.as_str() == "order-1"
        ));
    }

    #[test]
    fn empty_cart_checkout_is_allowed() {
        let action = checkout(
            CheckoutForm::new("A", "9999999999", "X"),
            &[],
            &create_test_env(),
            &StorefrontConfig::default(),
        );
        assert!(matches!(
            action,
            Ok(StoreAction::PlaceOrder { ref order }) if order.items.is_empty()
        ));
    }

    #[test]
    fn review_is_dated_from_clock() {
        let rating = Rating::new(4).unwrap_or_default();
        let action = submit_review(
            ProductId::from("jute-basket"),
            ReviewForm::new("Asha", rating, "Sturdy"),
            &create_test_env(),
        );

        let StoreAction::AddReview { product_id, review } = action else {
            unreachable!("submit_review always builds AddReview");
        };
        assert_eq!(product_id.as_str(), "jute-basket");
        assert_eq!(review.date, "Wed Jan 01 2025");
        assert_eq!(review.rating.stars(), 4);
        assert_eq!(review.comment, "Sturdy");
    }

    #[test]
    fn review_form_defaults_to_five_stars() {
        assert_eq!(ReviewForm::default().rating.stars(), 5);
    }
}
