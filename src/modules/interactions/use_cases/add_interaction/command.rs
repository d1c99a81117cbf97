// Command data type for recording a favorite or a shopping cart entry.
//
// Purpose
// - Express that a user wants a recipe in one of their collections.
//
// Responsibilities
// - Carry the (user, recipe, kind) triple to the handler.
// - Stay independent of the transport (HTTP route or GraphQL mutation).

use crate::modules::interactions::core::interaction::InteractionKind;
use crate::shared::core::primitives::{RecipeId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddInteraction {
    pub user_id: UserId,
    pub recipe_id: RecipeId,
    pub kind: InteractionKind,
}
