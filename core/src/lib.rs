//! # Pupusada Core
//!
//! Core traits and types for the Pupusada order state architecture.
//!
//! This crate provides the fundamental abstractions for building the
//! reducer-driven order state core: a feature defines its state, its actions,
//! and a [`reducer::Reducer`] that maps every action to a state transition.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (owned, `Clone`-able data)
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Dependency Injection via Environment
//! - Single-threaded, run-to-completion dispatch (no hidden I/O, no effects)
//!
//! ## Example
//!
//! ```
//! use pupusada_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct TallyState {
//!     total: u32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum TallyAction {
//!     Add(u32),
//!     Clear,
//! }
//!
//! struct TallyReducer;
//!
//! impl Reducer for TallyReducer {
//!     type State = TallyState;
//!     type Action = TallyAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut TallyState, action: TallyAction, _env: &()) {
//!         match action {
//!             TallyAction::Add(n) => state.total += n,
//!             TallyAction::Clear => state.total = 0,
//!         }
//!     }
//! }
//!
//! let mut state = TallyState::default();
//! TallyReducer.reduce(&mut state, TallyAction::Add(3), &());
//! assert_eq!(state.total, 3);
//! ```

// Re-export commonly used types
pub use uuid::Uuid;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → State`.
///
/// They contain all business logic, run to completion synchronously, and are
/// deterministic given their environment — which makes them testable without
/// any runtime harness.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for OrderReducer {
    ///     type State = OrderState;
    ///     type Action = OrderAction;
    ///     type Environment = OrderEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut OrderState,
    ///         action: OrderAction,
    ///         env: &OrderEnvironment,
    ///     ) {
    ///         match action {
    ///             OrderAction::CreateGroup { group_name, people_count } => {
    ///                 // Business logic here
    ///             }
    ///             _ => {}
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into a state change
        ///
        /// This is a pure transition that:
        /// 1. Validates the action against the current state
        /// 2. Updates state in place through the exclusive borrow
        ///
        /// Holding an exclusive `&mut` borrow means no other reference can
        /// observe the transition in progress; snapshots cloned before a
        /// dispatch are never affected by it.
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        );
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected via
/// the Environment parameter, so reducers stay deterministic under test.
pub mod environment {
    use uuid::Uuid;

    /// `IdGenerator` trait - abstracts identifier minting for testability
    ///
    /// Reducers that create entities mint their ids through this trait. The
    /// only contract is that ids are unique for the lifetime of a session and
    /// never reused once assigned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pupusada_core::environment::{IdGenerator, UuidIds};
    ///
    /// let ids = UuidIds;
    /// assert_ne!(ids.next_id(), ids.next_id());
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Mint a fresh identifier, unique within the session
        fn next_id(&self) -> Uuid;
    }

    /// Production id generator backed by random UUID v4
    ///
    /// Collisions are vanishingly unlikely at any realistic session size, so
    /// random v4 satisfies the uniqueness contract. Tests that need
    /// reproducible ids use the sequential generator from the testing crate.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidIds;

    impl IdGenerator for UuidIds {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::environment::{IdGenerator, UuidIds};
    use super::reducer::Reducer;

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct TestState {
        applied: Vec<u32>,
    }

    enum TestAction {
        Push(u32),
        Drain,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(&self, state: &mut TestState, action: TestAction, _env: &()) {
            match action {
                TestAction::Push(n) => state.applied.push(n),
                TestAction::Drain => state.applied.clear(),
            }
        }
    }

    #[test]
    fn reducer_runs_to_completion_in_place() {
        let mut state = TestState::default();
        TestReducer.reduce(&mut state, TestAction::Push(1), &());
        TestReducer.reduce(&mut state, TestAction::Push(2), &());
        assert_eq!(state.applied, vec![1, 2]);

        TestReducer.reduce(&mut state, TestAction::Drain, &());
        assert_eq!(state, TestState::default());
    }

    #[test]
    fn snapshots_cloned_before_dispatch_are_unaffected() {
        let mut state = TestState::default();
        TestReducer.reduce(&mut state, TestAction::Push(7), &());

        let snapshot = state.clone();
        TestReducer.reduce(&mut state, TestAction::Drain, &());

        assert_eq!(snapshot.applied, vec![7]);
        assert!(state.applied.is_empty());
    }

    #[test]
    fn uuid_ids_are_unique_across_calls() {
        let ids = UuidIds;
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            assert!(seen.insert(ids.next_id()));
        }
    }
}
