use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::interactions::use_cases::add_interaction::inbound::graphql::AddInteractionMutation;
use crate::modules::interactions::use_cases::download_shopping_list::inbound::graphql::ShoppingListQuery;
use crate::modules::interactions::use_cases::get_recipe::inbound::graphql::RecipeQuery;
use crate::modules::interactions::use_cases::remove_interaction::inbound::graphql::RemoveInteractionMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ShoppingListQuery, RecipeQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(AddInteractionMutation, RemoveInteractionMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
