// Cross use case scenarios over the in memory adapters.

use crate::modules::interactions::adapters::outbound::interaction_store_in_memory::InMemoryInteractionStore;
use crate::modules::interactions::adapters::outbound::recipe_catalog_in_memory::InMemoryRecipeCatalog;
use crate::modules::interactions::core::interaction::{DuplicateAddPolicy, InteractionKind};
use crate::modules::interactions::core::ports::InteractionStore;
use crate::modules::interactions::use_cases::add_interaction::command::AddInteraction;
use crate::modules::interactions::use_cases::add_interaction::handler::AddInteractionHandler;
use crate::modules::interactions::use_cases::download_shopping_list::handler::DownloadShoppingListHandler;
use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::modules::interactions::use_cases::remove_interaction::command::RemoveInteraction;
use crate::modules::interactions::use_cases::remove_interaction::handler::RemoveInteractionHandler;
use crate::shared::core::primitives::{RecipeId, UserId};
use crate::tests::fixtures::recipes::{RecipeBuilder, flour_and_egg, flour_and_sugar};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::{fixture, rstest};
use std::collections::BTreeSet;
use std::sync::Arc;

type Store = InMemoryInteractionStore;
type Catalog = InMemoryRecipeCatalog;

struct Service {
    store: Arc<Store>,
    add_handler: AddInteractionHandler<Store, Catalog>,
    remove_handler: RemoveInteractionHandler<Store, Catalog>,
    download: DownloadShoppingListHandler<Store, Catalog>,
}

impl Service {
    async fn add(&self, user: u64, recipe: u64, kind: InteractionKind) -> Result<(), InteractionError> {
        self.add_handler
            .handle(AddInteraction {
                user_id: UserId(user),
                recipe_id: RecipeId(recipe),
                kind,
            })
            .await
            .map(|_| ())
    }

    async fn remove(&self, user: u64, recipe: u64, kind: InteractionKind) -> Result<(), InteractionError> {
        self.remove_handler
            .handle(RemoveInteraction {
                user_id: UserId(user),
                recipe_id: RecipeId(recipe),
                kind,
            })
            .await
    }
}

#[fixture]
fn service() -> Service {
    let store = Arc::new(InMemoryInteractionStore::new());
    let catalog = Arc::new(InMemoryRecipeCatalog::with_recipes([
        flour_and_sugar(1),
        flour_and_egg(2),
        RecipeBuilder::new(3)
            .ingredient("Flour", "g", "0.5")
            .ingredient("Butter", "g", "12.25")
            .build(),
    ]));
    Service {
        add_handler: AddInteractionHandler::new(store.clone(), catalog.clone(), DuplicateAddPolicy::Reject),
        remove_handler: RemoveInteractionHandler::new(store.clone(), catalog.clone()),
        download: DownloadShoppingListHandler::new(store.clone(), catalog),
        store,
    }
}

#[rstest]
#[tokio::test]
async fn two_recipes_in_the_cart_produce_the_summed_list(service: Service) {
    service.add(1, 1, InteractionKind::ShoppingCart).await.unwrap();
    service.add(1, 2, InteractionKind::ShoppingCart).await.unwrap();

    let list = service.download.handle(UserId(1)).await.unwrap();
    assert_eq!(list.to_text(), "Egg (pcs) — 2\nFlour (g) — 300\nSugar (g) — 50");
}

#[rstest]
#[tokio::test]
async fn aggregation_does_not_depend_on_cart_order(service: Service) {
    for recipe in [1, 2, 3] {
        service.add(1, recipe, InteractionKind::ShoppingCart).await.unwrap();
    }
    for recipe in [3, 1, 2] {
        service.add(2, recipe, InteractionKind::ShoppingCart).await.unwrap();
    }

    let first = service.download.handle(UserId(1)).await.unwrap();
    let second = service.download.handle(UserId(2)).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.to_text(),
        "Butter (g) — 12.25\nEgg (pcs) — 2\nFlour (g) — 300.5\nSugar (g) — 50"
    );
}

#[rstest]
#[tokio::test]
async fn an_empty_cart_cannot_be_downloaded(service: Service) {
    let result = service.download.handle(UserId(1)).await;
    assert!(matches!(result, Err(InteractionError::EmptyCart)));
}

#[rstest]
#[tokio::test]
async fn emptying_the_cart_makes_the_download_fail_again(service: Service) {
    service.add(1, 1, InteractionKind::ShoppingCart).await.unwrap();
    assert!(service.download.handle(UserId(1)).await.is_ok());
    service.remove(1, 1, InteractionKind::ShoppingCart).await.unwrap();
    assert!(matches!(
        service.download.handle(UserId(1)).await,
        Err(InteractionError::EmptyCart)
    ));
}

#[rstest]
#[tokio::test]
async fn removing_a_favorite_twice_reports_not_found(service: Service) {
    service.add(1, 1, InteractionKind::Favorite).await.unwrap();
    service.remove(1, 1, InteractionKind::Favorite).await.unwrap();
    let second = service.remove(1, 1, InteractionKind::Favorite).await;
    assert!(matches!(
        second,
        Err(InteractionError::NotFound(InteractionKind::Favorite))
    ));
}

#[rstest]
#[tokio::test]
async fn adding_twice_reports_already_exists(service: Service) {
    service.add(1, 2, InteractionKind::ShoppingCart).await.unwrap();
    let second = service.add(1, 2, InteractionKind::ShoppingCart).await;
    assert!(matches!(
        second,
        Err(InteractionError::AlreadyExists(InteractionKind::ShoppingCart))
    ));
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(42)]
#[case(2024)]
#[tokio::test]
async fn replaying_random_operations_matches_a_reference_model(service: Service, #[case] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut model: BTreeSet<(u64, u64, InteractionKind)> = BTreeSet::new();

    for _ in 0..200 {
        let user = rng.gen_range(1..=2);
        let recipe = rng.gen_range(1..=3);
        let kind = InteractionKind::ALL[rng.gen_range(0..InteractionKind::ALL.len())];
        let key = (user, recipe, kind);

        if rng.gen_bool(0.5) {
            let result = service.add(user, recipe, kind).await;
            assert_eq!(result.is_ok(), model.insert(key), "add {key:?}");
        } else {
            let result = service.remove(user, recipe, kind).await;
            assert_eq!(result.is_ok(), model.remove(&key), "remove {key:?}");
        }
    }

    for user in [1, 2] {
        for kind in InteractionKind::ALL {
            let expected: BTreeSet<RecipeId> = model
                .iter()
                .filter(|(u, _, k)| *u == user && *k == kind)
                .map(|(_, r, _)| RecipeId(*r))
                .collect();
            let actual = service.store.list_for_user(UserId(user), kind).await.unwrap();
            assert_eq!(actual, expected, "user {user} {kind}");
        }
    }
}
