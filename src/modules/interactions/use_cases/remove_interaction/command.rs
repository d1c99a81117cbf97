use crate::modules::interactions::core::interaction::InteractionKind;
use crate::shared::core::primitives::{RecipeId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveInteraction {
    pub user_id: UserId,
    pub recipe_id: RecipeId,
    pub kind: InteractionKind,
}
