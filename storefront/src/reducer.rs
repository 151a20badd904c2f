//! Reducer logic for the storefront.
//!
//! Four transitions, none of which can fail. Anything that needs checking
//! (mobile numbers, ratings, fresh order ids) is handled before an action is
//! built; see [`crate::checkout`].

use crate::types::{CartLine, StoreAction, StoreState};
use joot_core::{
    effect::Effect,
    environment::{Clock, IdGenerator, SystemClock, TimestampIdGenerator},
    reducer::Reducer,
    smallvec, SmallVec,
};
use std::sync::Arc;

/// Environment dependencies for the storefront
///
/// The reducer never reads it. Checkout and review helpers use it to stamp
/// order ids and review dates before building actions.
#[derive(Clone)]
pub struct StorefrontEnvironment {
    /// Clock for review dates
    pub clock: Arc<dyn Clock>,
    /// Source of order ids
    pub ids: Arc<dyn IdGenerator>,
}

impl StorefrontEnvironment {
    /// Creates a new `StorefrontEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// System clock and millisecond-timestamp order ids
    #[must_use]
    pub fn system() -> Self {
        Self::new(
            Arc::new(SystemClock),
            Arc::new(TimestampIdGenerator::new(SystemClock)),
        )
    }
}

impl std::fmt::Debug for StorefrontEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the storefront aggregate
#[derive(Clone, Debug, Default)]
pub struct StoreReducer;

impl StoreReducer {
    /// Creates a new `StoreReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for StoreReducer {
    type State = StoreState;
    type Action = StoreAction;
    type Environment = StorefrontEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            StoreAction::AddToCart { product } => {
                if let Some(line) = state.cart.iter_mut().find(|line| line.id() == &product.id) {
                    line.qty = line.qty.saturating_add(1);
                    tracing::debug!(product = %product.id, qty = line.qty, "Incremented cart line");
                } else {
                    tracing::debug!(product = %product.id, "Added cart line");
                    state.cart.push(CartLine::new(product));
                }
            },
            StoreAction::RemoveItem { id } => {
                let before = state.cart.len();
                state.cart.retain(|line| line.id() != &id);
                tracing::debug!(
                    product = %id,
                    removed = before != state.cart.len(),
                    "Removed cart line"
                );
            },
            StoreAction::PlaceOrder { order } => {
                tracing::debug!(order = %order.id, lines = order.items.len(), "Placed order");
                state.orders.push(order);
                state.cart.clear();
            },
            StoreAction::AddReview { product_id, review } => {
                tracing::debug!(product = %product_id, rating = review.rating.stars(), "Added review");
                state.reviews.entry(product_id).or_default().push(review);
            },
        }

        // Pure state machine - no side effects
        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::types::{
        Order, OrderId, OrderStatus, Price, Product, ProductId, Rating, Review,
    };
    use joot_testing::{assertions, test_clock, ReducerTest, SequentialIdGenerator};

    fn create_test_env() -> StorefrontEnvironment {
        StorefrontEnvironment::new(
            Arc::new(test_clock()),
            Arc::new(SequentialIdGenerator::new("order")),
        )
    }

    fn product(id: &str, price: u64) -> Product {
        Product::new(id, id, Price(price), "")
    }

    fn review(name: &str, stars: u8) -> Review {
        Review {
            name: name.to_string(),
            rating: Rating::new(stars).unwrap_or_default(),
            comment: format!("{name} says hi"),
            date: "Wed Jan 01 2025".to_string(),
        }
    }

    fn add(product: &Product) -> StoreAction {
        StoreAction::AddToCart {
            product: product.clone(),
        }
    }

    fn order(id: &str, items: Vec<CartLine>) -> Order {
        Order {
            id: OrderId::from(id),
            items,
            name: "A".to_string(),
            mobile: "9999999999".to_string(),
            address: "X".to_string(),
            status: OrderStatus::Confirmed,
        }
    }

    #[test]
    fn test_add_new_product_appends_line() {
        let basket = product("jute-basket", 799);

        ReducerTest::new(StoreReducer::new())
            .with_env(create_test_env())
            .given_state(StoreState::default())
            .when_action(add(&basket))
            .then_state(move |state| {
                assert_eq!(state.cart.len(), 1);
                assert_eq!(state.cart[0].product, basket);
                assert_eq!(state.cart[0].qty, 1);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_add_existing_product_increments_in_place() {
        let basket = product("jute-basket", 799);
        let carpet = product("jute-carpet", 1799);
        let coasters = product("jute-coasters", 299);

        ReducerTest::new(StoreReducer::new())
            .with_env(create_test_env())
            .given_state(StoreState::default())
            .when_actions([add(&basket), add(&carpet), add(&coasters), add(&carpet)])
            .then_state(|state| {
                let ids: Vec<_> = state.cart.iter().map(|l| l.id().as_str()).collect();
                assert_eq!(ids, vec!["jute-basket", "jute-carpet", "jute-coasters"]);
                let qtys: Vec<_> = state.cart.iter().map(|l| l.qty).collect();
                assert_eq!(qtys, vec![1, 2, 1]);
            })
            .run();
    }

    #[test]
    fn test_remove_item() {
        let basket = product("jute-basket", 799);
        let carpet = product("jute-carpet", 1799);

        ReducerTest::new(StoreReducer::new())
            .with_env(create_test_env())
            .given_state(StoreState::default())
            .when_actions([
                add(&basket),
                add(&carpet),
                StoreAction::RemoveItem {
                    id: ProductId::from("jute-basket"),
                },
            ])
            .then_state(|state| {
                assert_eq!(state.cart.len(), 1);
                assert_eq!(state.cart[0].id().as_str(), "jute-carpet");
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_remove_absent_item_is_noop() {
        let mut given = StoreState::default();
        given.cart.push(CartLine::new(product("jute-basket", 799)));
        let expected = given.cart.clone();

        ReducerTest::new(StoreReducer::new())
            .with_env(create_test_env())
            .given_state(given)
            .when_action(StoreAction::RemoveItem {
                id: ProductId::from("fruit-basket"),
            })
            .then_state(move |state| {
                assert_eq!(state.cart, expected);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_place_order_stores_payload_and_clears_cart() {
        let basket = product("jute-basket", 799);
        let mut given = StoreState::new();
        given.cart.push(CartLine {
            product: basket,
            qty: 2,
        });
        let placed = order("o1", given.cart.clone());
        let expected = placed.clone();

        ReducerTest::new(StoreReducer::new())
            .with_env(create_test_env())
            .given_state(given)
            .when_action(StoreAction::PlaceOrder { order: placed })
            .then_state(move |state| {
                assert!(state.cart.is_empty());
                assert_eq!(state.orders, vec![expected]);
                assert_eq!(state.wishlist, catalog::seed_wishlist());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_placed_order_unaffected_by_later_adds() {
        let basket = product("jute-basket", 799);
        let mut given = StoreState::default();
        given.cart.push(CartLine::new(basket.clone()));
        let snapshot = given.cart.clone();

        ReducerTest::new(StoreReducer::new())
            .with_env(create_test_env())
            .given_state(given)
            .when_actions([
                StoreAction::PlaceOrder {
                    order: order("o1", snapshot.clone()),
                },
                add(&basket),
                add(&basket),
            ])
            .then_state(move |state| {
                assert_eq!(state.orders[0].items, snapshot);
                assert_eq!(state.cart[0].qty, 2);
            })
            .run();
    }

    #[test]
    fn test_orders_append_in_placement_order() {
        ReducerTest::new(StoreReducer::new())
            .with_env(create_test_env())
            .given_state(StoreState::default())
            .when_actions([
                StoreAction::PlaceOrder {
                    order: order("o1", Vec::new()),
                },
                StoreAction::PlaceOrder {
                    order: order("o2", Vec::new()),
                },
            ])
            .then_state(|state| {
                let ids: Vec<_> = state.orders.iter().map(|o| o.id.as_str()).collect();
                assert_eq!(ids, vec!["o1", "o2"]);
            })
            .run();
    }

    #[test]
    fn test_add_review_appends() {
        let id = ProductId::from("jute-basket");

        ReducerTest::new(StoreReducer::new())
            .with_env(create_test_env())
            .given_state(StoreState::default())
            .when_actions([
                StoreAction::AddReview {
                    product_id: id.clone(),
                    review: review("Asha", 5),
                },
                StoreAction::AddReview {
                    product_id: ProductId::from("jute-carpet"),
                    review: review("Ravi", 2),
                },
                StoreAction::AddReview {
                    product_id: id.clone(),
                    review: review("Meera", 3),
                },
            ])
            .then_state(move |state| {
                let names: Vec<_> = state
                    .reviews_for(&id)
                    .iter()
                    .map(|r| r.name.as_str())
                    .collect();
                assert_eq!(names, vec!["Asha", "Meera"]);
                assert_eq!(state.reviews_for(&ProductId::from("jute-carpet")).len(), 1);
                assert!((state.average_rating(&id) - 4.0).abs() < f64::EPSILON);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_add_review_does_not_touch_cart_or_orders() {
        let mut given = StoreState::default();
        given.cart.push(CartLine::new(product("jute-basket", 799)));

        ReducerTest::new(StoreReducer::new())
            .with_env(create_test_env())
            .given_state(given)
            .when_action(StoreAction::AddReview {
                product_id: ProductId::from("jute-basket"),
                review: review("Asha", 4),
            })
            .then_state(|state| {
                assert_eq!(state.cart.len(), 1);
                assert!(state.orders.is_empty());
            })
            .run();
    }
}
