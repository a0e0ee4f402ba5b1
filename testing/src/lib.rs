//! # Pupusada Testing
//!
//! Testing utilities and helpers for the Pupusada order state architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - The [`ReducerTest`] fixture with Given-When-Then syntax
//!
//! ## Example
//!
//! ```ignore
//! use pupusada_testing::{ReducerTest, test_ids};
//! use std::sync::Arc;
//!
//! ReducerTest::new(OrderReducer::new())
//!     .with_env(OrderEnvironment::new(Arc::new(test_ids())))
//!     .given_state(OrderState::new())
//!     .when_action(OrderAction::ResetOrder)
//!     .then_state(|state| assert!(state.order.is_none()))
//!     .run();
//! ```


/// Mock implementations for testing.
pub mod mocks {
    use pupusada_core::environment::IdGenerator;
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Sequential id generator for deterministic tests
    ///
    /// Mints `Uuid::from_u128(1)`, `Uuid::from_u128(2)`, … in order, so a
    /// test can predict every id a reducer will assign. The counter starts at
    /// one to keep the nil UUID out of circulation.
    ///
    /// # Example
    ///
    /// ```
    /// use pupusada_testing::mocks::SequentialIds;
    /// use pupusada_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIds::new();
    /// assert_eq!(ids.next_id(), Uuid::from_u128(1));
    /// assert_eq!(ids.next_id(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        issued: AtomicU64,
    }

    impl SequentialIds {
        /// Create a new sequential generator starting at id 1
        #[must_use]
        pub const fn new() -> Self {
            Self {
                issued: AtomicU64::new(0),
            }
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> Uuid {
            let n = self.issued.fetch_add(1, Ordering::Relaxed);
            Uuid::from_u128(u128::from(n) + 1)
        }
    }

    /// Create a fresh sequential id generator for tests
    #[must_use]
    pub const fn test_ids() -> SequentialIds {
        SequentialIds::new()
    }
}

// Re-export commonly used items
pub use mocks::{SequentialIds, test_ids};
pub use reducer_test::ReducerTest;
