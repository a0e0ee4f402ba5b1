//! Group pupusa ordering: shared state core for collaborative order tracking.
//!
//! One person collects a table's pupusa order: create a named group, rename
//! the participants, add and remove pupusas per person, then derive the
//! kitchen summary to share. This crate holds the whole domain:
//!
//! - Order model (group, people, pupusa entries) with closed dough and
//!   filling catalogs
//! - Pure reducer over the five order actions, with typed rejections
//! - Read-only summary derivation, including the byte-stable kitchen message
//! - Testing with `ReducerTest`
//!
//! # Quick Start
//!
//! ```
//! use pupusada::{Dough, Filling, OrderAction, OrderEnvironment, OrderReducer, OrderState};
//! use pupusada::derive_summary;
//! use pupusada_core::environment::UuidIds;
//! use pupusada_runtime::Store;
//! use std::sync::Arc;
//!
//! // Create environment and store
//! let env = OrderEnvironment::new(Arc::new(UuidIds));
//! let mut store = Store::new(OrderState::new(), OrderReducer::new(), env);
//!
//! // Start an order for the table
//! store.send(OrderAction::CreateGroup {
//!     group_name: "Mesa 3".to_string(),
//!     people_count: 2,
//! });
//!
//! // Everyone gets a default name; pick the first person
//! let person_id = store.state(|s| {
//!     s.order.as_ref().map(|order| order.people[0].id.clone())
//! });
//!
//! if let Some(person_id) = person_id {
//!     store.send(OrderAction::RenamePerson {
//!         person_id: person_id.clone(),
//!         new_name: "Ana".to_string(),
//!     });
//!     store.send(OrderAction::AddPupusa {
//!         person_id,
//!         dough: Dough::Maiz,
//!         filling: Filling::Queso,
//!         quantity: 3,
//!     });
//! }
//!
//! // Derive the kitchen summary
//! let total = store.state(|s| {
//!     s.order.as_ref().map(|order| derive_summary(order).total)
//! });
//! assert_eq!(total, Some(3));
//! ```

pub mod error;
pub mod reducer;
pub mod summary;
pub mod types;

// Re-export commonly used types
pub use error::OrderError;
pub use reducer::{OrderEnvironment, OrderReducer};
pub use summary::{derive_summary, AggregatedPupusa, DoughTotals, OrderSummary};
pub use types::{
    Dough, Filling, GroupOrder, OrderAction, OrderState, Person, PersonId, Pupusa, PupusaId,
};
