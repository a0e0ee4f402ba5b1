//! # Pupusada Runtime
//!
//! Runtime implementation for the Pupusada order state architecture.
//!
//! This crate provides the Store runtime that owns a feature's state and
//! coordinates reducer execution.
//!
//! ## Core Components
//!
//! - **Store**: The state container that dispatches actions through the
//!   reducer, one at a time, run to completion
//!
//! The store is single-threaded by construction: dispatch takes `&mut self`,
//! so no action can observe another action's transition in progress and no
//! locking is required. Collaborators that want to keep an old snapshot
//! around clone it before dispatching.
//!
//! ## Example
//!
//! ```ignore
//! use pupusada_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething);
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use pupusada_core::reducer::Reducer;

/// The Store - state container and dispatch loop for a reducer
///
/// Owns the current state, the reducer, and the environment. Every action is
/// processed synchronously and to completion before `send` returns, which
/// gives the run-to-completion semantics the reducer contract assumes.
pub struct Store<R>
where
    R: Reducer,
{
    state: R::State,
    reducer: R,
    environment: R::Environment,
}

impl<R> Store<R>
where
    R: Reducer,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting state for the store
    /// - `reducer`: The reducer implementation (business logic)
    /// - `environment`: Injected dependencies
    #[must_use]
    pub const fn new(initial_state: R::State, reducer: R, environment: R::Environment) -> Self {
        Self {
            state: initial_state,
            reducer,
            environment,
        }
    }

    /// Send an action through the reducer
    ///
    /// The action is processed immediately and to completion; when this
    /// returns, the state reflects the transition.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub fn send(&mut self, action: R::Action)
    where
        R::Action: std::fmt::Debug,
    {
        tracing::debug!(action = ?action, "Processing action");
        self.reducer
            .reduce(&mut self.state, action, &self.environment);
    }

    /// Read from the current state through a mapping closure
    ///
    /// The closure receives a shared borrow of the snapshot; return owned
    /// data (or clone) to keep anything beyond the call.
    pub fn state<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.state)
    }

    /// Consume the store and return the final state
    #[must_use]
    pub fn into_state(self) -> R::State {
        self.state
    }
}
