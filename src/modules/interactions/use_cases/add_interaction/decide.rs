// Pure decision function for adding an interaction.
//
// Purpose
// - Turn the outcome of the store's atomic insert into the use case result.
//
// Responsibilities
// - A fresh record is always `Created`.
// - A `Conflict` is `AlreadyExists` under `Reject` and `AlreadyPresent` under `Ignore`.
// - A recipe purged between the catalog check and the insert is `RecipeNotFound`.
// - Backend failures pass through untouched.
// - Never perform input or output.

use crate::modules::interactions::core::interaction::{DuplicateAddPolicy, Interaction};
use crate::modules::interactions::core::ports::InteractionStoreError;
use crate::modules::interactions::use_cases::add_interaction::command::AddInteraction;
use crate::modules::interactions::use_cases::add_interaction::decision::Decision;
use crate::modules::interactions::use_cases::errors::InteractionError;

pub fn decide_add(
    command: &AddInteraction,
    outcome: Result<Interaction, InteractionStoreError>,
    policy: DuplicateAddPolicy,
) -> Result<Decision, InteractionError> {
    match outcome {
        Ok(interaction) => Ok(Decision::Created(interaction)),
        Err(InteractionStoreError::Conflict { .. }) => match policy {
            DuplicateAddPolicy::Reject => Err(InteractionError::AlreadyExists(command.kind)),
            DuplicateAddPolicy::Ignore => Ok(Decision::AlreadyPresent),
        },
        Err(InteractionStoreError::RecipeRetired(recipe_id)) => {
            Err(InteractionError::RecipeNotFound(recipe_id))
        }
        Err(other) => Err(InteractionError::Store(other)),
    }
}
