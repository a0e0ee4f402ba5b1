//! Rejection errors recorded by the order reducer.
//!
//! These cover invalid inputs only. Reference misses (unknown person or
//! pupusa ids) and actions dispatched with no active order are silent no-ops
//! and never produce an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an action was rejected
///
/// The reducer records the rejection in [`OrderState::last_error`] and leaves
/// the rest of the state untouched.
///
/// [`OrderState::last_error`]: crate::types::OrderState::last_error
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum OrderError {
    /// Group creation with a blank (or whitespace-only) name
    #[error("Group name cannot be empty")]
    EmptyGroupName,

    /// Group creation with a people count outside 1..=20
    #[error("People count must be between 1 and 20, got {given}")]
    InvalidPeopleCount {
        /// The rejected count
        given: u32,
    },

    /// Rename to a blank (or whitespace-only) name
    #[error("Person name cannot be empty")]
    EmptyPersonName,

    /// Pupusa entry with a zero quantity
    #[error("Quantity must be at least 1")]
    InvalidQuantity,
}
