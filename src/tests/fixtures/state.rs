// Wiring for inbound adapter tests.
//
// Catalog
// - 1: Sweet crepes (Flour 200 g, Sugar 50 g), author 1
// - 2: Egg bread (Flour 100 g, Egg 2 pcs), author 2
// - 3: Weeknight pancakes without ingredients, author 1
//
// Users: 1 holds ANNA_TOKEN, 2 holds BOB_TOKEN, 3 (Carol) has no token.
// Nobody follows anybody yet.

use crate::modules::interactions::adapters::outbound::interaction_store_in_memory::InMemoryInteractionStore;
use crate::modules::interactions::adapters::outbound::recipe_catalog_in_memory::InMemoryRecipeCatalog;
use crate::modules::interactions::adapters::outbound::subscription_store_in_memory::InMemorySubscriptionStore;
use crate::modules::interactions::adapters::outbound::users_in_memory::InMemoryUsers;
use crate::modules::interactions::core::interaction::DuplicateAddPolicy;
use crate::modules::interactions::core::user::CurrentUser;
use crate::shared::core::primitives::UserId;
use crate::shell::state::AppState;
use crate::tests::fixtures::recipes::{RecipeBuilder, flour_and_egg, flour_and_sugar};
use std::sync::Arc;

pub const ANNA_TOKEN: &str = "anna-token";
pub const BOB_TOKEN: &str = "bob-token";
pub const BASE_URL: &str = "https://foodgram.example";

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryInteractionStore>,
    pub catalog: Arc<InMemoryRecipeCatalog>,
    pub subscriptions: Arc<InMemorySubscriptionStore>,
}

pub fn auth(token: &str) -> String {
    format!("Token {token}")
}

async fn users() -> InMemoryUsers {
    let users = InMemoryUsers::new();
    users
        .register_with_token(
            CurrentUser {
                id: UserId(1),
                email: "anna@example.com".into(),
            },
            ANNA_TOKEN,
        )
        .await;
    users
        .register_with_token(
            CurrentUser {
                id: UserId(2),
                email: "bob@example.com".into(),
            },
            BOB_TOKEN,
        )
        .await;
    users
        .register(CurrentUser {
            id: UserId(3),
            email: "carol@example.com".into(),
        })
        .await;
    users
}

fn catalog() -> InMemoryRecipeCatalog {
    InMemoryRecipeCatalog::with_recipes([
        flour_and_sugar(1),
        flour_and_egg(2),
        RecipeBuilder::new(3).build(),
    ])
}

async fn assemble(store: InMemoryInteractionStore, policy: DuplicateAddPolicy) -> TestApp {
    let store = Arc::new(store);
    let catalog = Arc::new(catalog());
    let subscriptions = Arc::new(InMemorySubscriptionStore::new());
    let state = AppState::new(
        store.clone(),
        catalog.clone(),
        subscriptions.clone(),
        Arc::new(users().await),
        policy,
        BASE_URL,
    );
    TestApp {
        state,
        store,
        catalog,
        subscriptions,
    }
}

pub async fn make_test_state() -> TestApp {
    assemble(InMemoryInteractionStore::new(), DuplicateAddPolicy::Reject).await
}

pub async fn make_test_state_with_policy(policy: DuplicateAddPolicy) -> TestApp {
    assemble(InMemoryInteractionStore::new(), policy).await
}

pub async fn make_offline_store_state() -> TestApp {
    let mut store = InMemoryInteractionStore::new();
    store.toggle_offline();
    assemble(store, DuplicateAddPolicy::Reject).await
}
