use crate::modules::interactions::adapters::outbound::interaction_store_in_memory::InMemoryInteractionStore;
use crate::modules::interactions::adapters::outbound::recipe_catalog_in_memory::InMemoryRecipeCatalog;
use crate::modules::interactions::adapters::outbound::subscription_store_in_memory::InMemorySubscriptionStore;
use crate::modules::interactions::adapters::outbound::users_in_memory::InMemoryUsers;
use crate::modules::interactions::core::interaction::DuplicateAddPolicy;
use crate::modules::interactions::core::ports::Authenticator;
use crate::modules::interactions::use_cases::add_interaction::handler::AddInteractionHandler;
use crate::modules::interactions::use_cases::delete_recipe::handler::DeleteRecipeHandler;
use crate::modules::interactions::use_cases::download_shopping_list::handler::DownloadShoppingListHandler;
use crate::modules::interactions::use_cases::get_recipe::handler::GetRecipeHandler;
use crate::modules::interactions::use_cases::list_recipes::handler::ListRecipesHandler;
use crate::modules::interactions::use_cases::list_subscriptions::handler::ListSubscriptionsHandler;
use crate::modules::interactions::use_cases::remove_interaction::handler::RemoveInteractionHandler;
use crate::modules::interactions::use_cases::short_link::handler::ShortLinkHandler;
use crate::modules::interactions::use_cases::subscribe::handler::SubscribeHandler;
use crate::modules::interactions::use_cases::unsubscribe::handler::UnsubscribeHandler;
use std::sync::Arc;

type Store = InMemoryInteractionStore;
type Catalog = InMemoryRecipeCatalog;
type Subscriptions = InMemorySubscriptionStore;
type Users = InMemoryUsers;

#[derive(Clone)]
pub struct AppState {
    pub authenticator: Arc<dyn Authenticator + Send + Sync>,
    pub add_handler: Arc<AddInteractionHandler<Store, Catalog>>,
    pub remove_handler: Arc<RemoveInteractionHandler<Store, Catalog>>,
    pub download_handler: Arc<DownloadShoppingListHandler<Store, Catalog>>,
    pub get_recipe_handler: Arc<GetRecipeHandler<Store, Catalog>>,
    pub list_recipes_handler: Arc<ListRecipesHandler<Store, Catalog>>,
    pub short_link_handler: Arc<ShortLinkHandler<Catalog>>,
    pub delete_recipe_handler: Arc<DeleteRecipeHandler<Store, Catalog>>,
    pub subscribe_handler: Arc<SubscribeHandler<Subscriptions, Users, Catalog>>,
    pub unsubscribe_handler: Arc<UnsubscribeHandler<Subscriptions, Users>>,
    pub list_subscriptions_handler: Arc<ListSubscriptionsHandler<Subscriptions, Users, Catalog>>,
}

impl AppState {
    pub fn new(
        store: Arc<Store>,
        catalog: Arc<Catalog>,
        subscriptions: Arc<Subscriptions>,
        users: Arc<Users>,
        duplicate_add: DuplicateAddPolicy,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            authenticator: users.clone(),
            add_handler: Arc::new(AddInteractionHandler::new(
                store.clone(),
                catalog.clone(),
                duplicate_add,
            )),
            remove_handler: Arc::new(RemoveInteractionHandler::new(store.clone(), catalog.clone())),
            download_handler: Arc::new(DownloadShoppingListHandler::new(
                store.clone(),
                catalog.clone(),
            )),
            get_recipe_handler: Arc::new(GetRecipeHandler::new(store.clone(), catalog.clone())),
            list_recipes_handler: Arc::new(ListRecipesHandler::new(store.clone(), catalog.clone())),
            short_link_handler: Arc::new(ShortLinkHandler::new(catalog.clone(), base_url)),
            delete_recipe_handler: Arc::new(DeleteRecipeHandler::new(store, catalog.clone())),
            subscribe_handler: Arc::new(SubscribeHandler::new(
                subscriptions.clone(),
                users.clone(),
                catalog.clone(),
            )),
            unsubscribe_handler: Arc::new(UnsubscribeHandler::new(
                subscriptions.clone(),
                users.clone(),
            )),
            list_subscriptions_handler: Arc::new(ListSubscriptionsHandler::new(
                subscriptions,
                users,
                catalog,
            )),
        }
    }
}
