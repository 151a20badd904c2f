//! # Joot Runtime
//!
//! The Store runtime that owns a reducer's state and applies actions to it.
//!
//! ## Core Components
//!
//! - **Store**: Holds state, reducer and environment; the only way in is `send`
//! - **Feedback loop**: `Effect::Dispatch` actions are applied after the
//!   action that produced them, inside the same transition
//!
//! ## Example
//!
//! ```ignore
//! use joot_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use joot_core::{effect::Effect, reducer::Reducer};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

pub use error::StoreError;
pub use store::Store;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A chain of `Effect::Dispatch` actions grew past the configured cap
        ///
        /// Every action applied before the cap was hit stays applied.
        #[error("Feedback limit of {0} dispatched actions exceeded")]
        FeedbackLimitExceeded(usize),
    }
}

/// Configuration for Store behavior
///
/// # Example
///
/// ```
/// use joot_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_feedback_actions(8);
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of fed-back actions a single `send` may apply
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the feedback cap
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, max: usize) -> Self {
        self.max_feedback_actions = max;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 64,
        }
    }
}

/// Store module - The runtime for reducers
pub mod store {
    use super::{Arc, Effect, Reducer, RwLock, StoreConfig, StoreError, VecDeque};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; writers are serialized)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect feedback
    ///
    /// Cloning a Store is cheap and yields a handle to the same state.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(StoreState::new(), StoreReducer::new(), env);
    ///
    /// store.send(StoreAction::AddToCart { product }).await?;
    /// let count = store.state(StoreState::cart_item_count).await;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        config: StoreConfig,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                config,
            }
        }

        /// The environment this store passes to its reducer
        #[must_use]
        pub fn environment(&self) -> &E {
            &self.environment
        }

        /// Send an action to the store
        ///
        /// Holds the write lock until the action and every action it feeds
        /// back through `Effect::Dispatch` have been reduced, in FIFO order.
        /// No other `send` can observe or modify the state in between.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] when more than
        /// `max_feedback_actions` actions are fed back by one send.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            let mut state = self.state.write().await;
            let mut queue = VecDeque::from([action]);
            let mut fed_back = 0_usize;

            while let Some(action) = queue.pop_front() {
                metrics::counter!("store.actions.total").increment(1);
                let effects = self
                    .reducer
                    .reduce(&mut *state, action, &*self.environment);

                for effect in effects {
                    match effect {
                        Effect::None => {
                            metrics::counter!("store.effects.executed", "type" => "none")
                                .increment(1);
                        },
                        Effect::Dispatch(next) => {
                            fed_back += 1;
                            if fed_back > self.config.max_feedback_actions {
                                tracing::warn!(
                                    limit = self.config.max_feedback_actions,
                                    "Dropping dispatched action, feedback limit reached"
                                );
                                return Err(StoreError::FeedbackLimitExceeded(
                                    self.config.max_feedback_actions,
                                ));
                            }
                            tracing::trace!(fed_back, "Queueing dispatched action");
                            metrics::counter!("store.effects.executed", "type" => "dispatch")
                                .increment(1);
                            queue.push_back(*next);
                        },
                    }
                }
            }

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// # Example
        ///
        /// ```ignore
        /// let total = store.state(|s| s.cart_total()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Clone the whole state out of the store
        pub async fn snapshot(&self) -> S
        where
            S: Clone,
        {
            self.state(S::clone).await
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                config: self.config.clone(),
            }
        }
    }
}
