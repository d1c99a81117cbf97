use crate::modules::interactions::core::interaction::DuplicateAddPolicy;
use crate::modules::interactions::core::ports::{InteractionStore, RecipeCatalog};
use crate::modules::interactions::core::recipe::RecipeSummary;
use crate::modules::interactions::use_cases::add_interaction::command::AddInteraction;
use crate::modules::interactions::use_cases::add_interaction::decide::decide_add;
use crate::modules::interactions::use_cases::add_interaction::decision::Decision;
use crate::modules::interactions::use_cases::errors::InteractionError;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedInteraction {
    pub recipe: RecipeSummary,
    /// `false` when a duplicate was accepted under `DuplicateAddPolicy::Ignore`.
    pub created: bool,
}

pub struct AddInteractionHandler<TStore, TCatalog>
where
    TStore: InteractionStore + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    store: Arc<TStore>,
    catalog: Arc<TCatalog>,
    policy: DuplicateAddPolicy,
}

impl<TStore, TCatalog> AddInteractionHandler<TStore, TCatalog>
where
    TStore: InteractionStore + Send + Sync + 'static,
    TCatalog: RecipeCatalog + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, catalog: Arc<TCatalog>, policy: DuplicateAddPolicy) -> Self {
        Self {
            store,
            catalog,
            policy,
        }
    }

    pub async fn handle(&self, command: AddInteraction) -> Result<AddedInteraction, InteractionError> {
        let recipe = self
            .catalog
            .get_by_id(command.recipe_id)
            .await?
            .ok_or(InteractionError::RecipeNotFound(command.recipe_id))?;

        let outcome = self
            .store
            .add(command.user_id, command.recipe_id, command.kind)
            .await;

        match decide_add(&command, outcome, self.policy) {
            Ok(Decision::Created(interaction)) => {
                info!(
                    user_id = %interaction.user_id,
                    recipe_id = %interaction.recipe_id,
                    kind = %interaction.kind,
                    "interaction added"
                );
                Ok(AddedInteraction {
                    recipe: recipe.summary(),
                    created: true,
                })
            }
            Ok(Decision::AlreadyPresent) => Ok(AddedInteraction {
                recipe: recipe.summary(),
                created: false,
            }),
            Err(error) => {
                warn!(
                    user_id = %command.user_id,
                    recipe_id = %command.recipe_id,
                    kind = %command.kind,
                    %error,
                    "interaction add refused"
                );
                Err(error)
            }
        }
    }
}
