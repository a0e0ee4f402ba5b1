//! Reducer logic for the group order.
//!
//! Validate-then-apply over five actions. Invalid inputs are recorded in
//! `last_error` and leave the rest of the state untouched; reference misses
//! (unknown person or pupusa ids) and actions dispatched with no active order
//! are silent no-ops. Dispatching can never panic.

use crate::error::OrderError;
use crate::types::{GroupOrder, OrderAction, OrderState, Person, PersonId, Pupusa, PupusaId};
use pupusada_core::{environment::IdGenerator, reducer::Reducer};

/// Environment dependencies for the order reducer
#[derive(Clone)]
pub struct OrderEnvironment {
    /// Id source for people and pupusa entries
    pub ids: std::sync::Arc<dyn IdGenerator>,
}

impl OrderEnvironment {
    /// Creates a new `OrderEnvironment`
    #[must_use]
    pub fn new(ids: std::sync::Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

/// Reducer for the group order
#[derive(Clone, Debug)]
pub struct OrderReducer;

impl OrderReducer {
    /// Creates a new `OrderReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a `CreateGroup` action
    fn validate_create_group(group_name: &str, people_count: u32) -> Result<(), OrderError> {
        if group_name.trim().is_empty() {
            return Err(OrderError::EmptyGroupName);
        }

        if people_count == 0 || people_count > 20 {
            return Err(OrderError::InvalidPeopleCount {
                given: people_count,
            });
        }

        Ok(())
    }

    /// Validates a `RenamePerson` action
    fn validate_rename_person(new_name: &str) -> Result<(), OrderError> {
        if new_name.trim().is_empty() {
            return Err(OrderError::EmptyPersonName);
        }

        Ok(())
    }

    /// Validates an `AddPupusa` action
    fn validate_add_pupusa(quantity: u32) -> Result<(), OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity);
        }

        Ok(())
    }
}

impl Default for OrderReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for OrderReducer {
    type State = OrderState;
    type Action = OrderAction;
    type Environment = OrderEnvironment;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        match action {
            OrderAction::CreateGroup {
                group_name,
                people_count,
            } => {
                if let Err(error) = Self::validate_create_group(&group_name, people_count) {
                    tracing::debug!(error = %error, "Rejected group creation");
                    state.last_error = Some(error);
                    return;
                }

                let people = (1..=people_count)
                    .map(|i| {
                        Person::new(
                            PersonId::from_uuid(env.ids.next_id()),
                            format!("Persona {i}"),
                        )
                    })
                    .collect();

                // Replaces any existing order, no merge
                state.order = Some(GroupOrder::new(group_name.trim().to_string(), people));
                state.last_error = None;
            }

            OrderAction::RenamePerson {
                person_id,
                new_name,
            } => {
                let Some(order) = state.order.as_mut() else {
                    return;
                };

                // Reference misses are silent, even with an invalid payload
                let Some(person) = order.person_mut(&person_id) else {
                    return;
                };

                if let Err(error) = Self::validate_rename_person(&new_name) {
                    tracing::debug!(error = %error, "Rejected rename");
                    state.last_error = Some(error);
                    return;
                }

                person.name = new_name.trim().to_string();
                state.last_error = None;
            }

            OrderAction::AddPupusa {
                person_id,
                dough,
                filling,
                quantity,
            } => {
                let Some(order) = state.order.as_mut() else {
                    return;
                };

                let Some(person) = order.person_mut(&person_id) else {
                    return;
                };

                if let Err(error) = Self::validate_add_pupusa(quantity) {
                    tracing::debug!(error = %error, "Rejected pupusa entry");
                    state.last_error = Some(error);
                    return;
                }

                // Duplicate dough+filling combos stay distinct entries
                let id = PupusaId::from_uuid(env.ids.next_id());
                person.pupusas.push(Pupusa::new(id, dough, filling, quantity));
                state.last_error = None;
            }

            OrderAction::RemovePupusa {
                person_id,
                pupusa_id,
            } => {
                let Some(order) = state.order.as_mut() else {
                    return;
                };

                let Some(person) = order.person_mut(&person_id) else {
                    return;
                };

                let before = person.pupusas.len();
                person.pupusas.retain(|p| p.id != pupusa_id);

                // Unknown pupusa ids leave the state untouched
                if person.pupusas.len() < before {
                    state.last_error = None;
                }
            }

            OrderAction::ResetOrder => {
                *state = OrderState::new();
            }
        }
    }
}
