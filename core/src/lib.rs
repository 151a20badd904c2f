//! # Joot Core
//!
//! Core traits and types for the Joot storefront state machine.
//!
//! The storefront is built as a reducer: every state change is an action
//! applied to an owned state value by a pure function. This crate defines the
//! vocabulary shared by the runtime, the test harness and the storefront
//! domain.
//!
//! ## Core Concepts
//!
//! - **State**: The aggregate a reducer owns (cart, orders, reviews, ...)
//! - **Action**: The closed set of transitions a reducer accepts
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: A description of follow-up work, never executed here
//! - **Environment**: Injected sources of time and identifiers
//!
//! ## Example
//!
//! ```
//! use joot_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Default)]
//! struct BadgeState {
//!     count: u32,
//! }
//!
//! enum BadgeAction {
//!     Bump,
//! }
//!
//! struct BadgeReducer;
//!
//! impl Reducer for BadgeReducer {
//!     type State = BadgeState;
//!     type Action = BadgeAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut BadgeState,
//!         action: BadgeAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<BadgeAction>; 4]> {
//!         match action {
//!             BadgeAction::Bump => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = BadgeState::default();
//! BadgeReducer.reduce(&mut state, BadgeAction::Bump, &());
//! assert_eq!(state.count, 1);
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They hold all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Updates `state` in place and returns effect descriptions for the
        /// runtime. Must not perform I/O and must not fail: inputs that reach
        /// a reducer are already well-typed.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects are values returned from reducers. The runtime decides how to
/// carry them out; a reducer never does.
pub mod effect {
    /// Effect type - describes follow-up work for the runtime
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the same reducer once the current
        /// transition has completed
        Dispatch(Box<Action>),
    }

    impl<Action> Effect<Action> {
        /// Wrap an action as a feedback effect
        #[must_use]
        pub fn dispatch(action: Action) -> Self {
            Self::Dispatch(Box::new(action))
        }

        /// Whether this effect does nothing
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Self::None)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// Time and identifiers are the only inputs the storefront takes from the
/// outside world. Both are abstracted here so tests can pin them.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Source of opaque identifiers for new records
    pub trait IdGenerator: Send + Sync {
        /// Produce the next identifier
        fn next_id(&self) -> String;
    }

    /// Identifier generator that renders the clock's current time as
    /// milliseconds since the Unix epoch.
    ///
    /// Two calls within the same millisecond return the same id. Callers that
    /// need strict uniqueness must supply their own generator.
    #[derive(Debug, Clone, Default)]
    pub struct TimestampIdGenerator<C> {
        clock: C,
    }

    impl<C: Clock> TimestampIdGenerator<C> {
        /// Create a generator reading from `clock`
        #[must_use]
        pub const fn new(clock: C) -> Self {
            Self { clock }
        }
    }

    impl<C: Clock> IdGenerator for TimestampIdGenerator<C> {
        fn next_id(&self) -> String {
            self.clock.now().timestamp_millis().to_string()
        }
    }
}
