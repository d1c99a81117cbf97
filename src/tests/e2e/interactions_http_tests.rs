// End to end flows through the assembled router, REST and GraphQL.

use axum::{
    Router,
    body::Body,
    http::{
        Request, StatusCode,
        header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE, LOCATION},
    },
    response::Response,
};
use http_body_util::BodyExt;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::interactions::core::interaction::DuplicateAddPolicy;
use crate::shell::graphql::build_schema;
use crate::shell::http::router;
use crate::tests::fixtures::state::{
    ANNA_TOKEN, BOB_TOKEN, TestApp, auth, make_offline_store_state, make_test_state,
    make_test_state_with_policy,
};

fn app(test_app: &TestApp) -> Router {
    router(test_app.state.clone(), build_schema(test_app.state.clone()))
}

fn request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, auth(token));
    }
    builder.body(Body::empty()).unwrap()
}

fn gql(query: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::post("/gql").header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, auth(token));
    }
    builder
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap()
}

async fn text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn json_body(response: Response) -> Value {
    serde_json::from_str(&text(response).await).unwrap()
}

#[tokio::test]
async fn cart_flow_from_add_to_download() {
    let test_app = make_test_state().await;
    let router = app(&test_app);

    for uri in ["/recipes/1/shopping_cart", "/recipes/2/shopping_cart"] {
        let response = router
            .clone()
            .oneshot(request("POST", uri, Some(ANNA_TOKEN)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED, "{uri}");
    }

    let response = router
        .clone()
        .oneshot(request("GET", "/recipes/download_shopping_cart", Some(ANNA_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[CONTENT_DISPOSITION],
        "attachment; filename=\"shopping_list.txt\""
    );
    assert_eq!(
        text(response).await,
        "Egg (pcs) — 2\nFlour (g) — 300\nSugar (g) — 50"
    );

    let response = router
        .clone()
        .oneshot(request("DELETE", "/recipes/2/shopping_cart", Some(ANNA_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(request("GET", "/recipes/download_shopping_cart", Some(ANNA_TOKEN)))
        .await
        .unwrap();
    assert_eq!(text(response).await, "Flour (g) — 200\nSugar (g) — 50");
}

#[tokio::test]
async fn carts_are_private_to_each_user() {
    let test_app = make_test_state().await;
    let router = app(&test_app);

    router
        .clone()
        .oneshot(request("POST", "/recipes/2/shopping_cart", Some(BOB_TOKEN)))
        .await
        .unwrap();

    let response = router
        .oneshot(request("GET", "/recipes/download_shopping_cart", Some(ANNA_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["detail"], "The shopping cart is empty");
}

#[rstest]
#[case("POST", "/recipes/1/shopping_cart")]
#[case("DELETE", "/recipes/1/shopping_cart")]
#[case("POST", "/recipes/1/favorite")]
#[case("DELETE", "/recipes/1/favorite")]
#[case("GET", "/recipes/download_shopping_cart")]
#[case("DELETE", "/recipes/1")]
#[tokio::test]
async fn mutating_routes_require_credentials(#[case] method: &str, #[case] uri: &str) {
    let test_app = make_test_state().await;
    let response = app(&test_app).oneshot(request(method, uri, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await["detail"],
        "Authentication credentials were not provided."
    );
}

#[tokio::test]
async fn recipe_detail_and_listing_follow_the_callers_state() {
    let test_app = make_test_state().await;
    let router = app(&test_app);

    router
        .clone()
        .oneshot(request("POST", "/recipes/2/favorite", Some(ANNA_TOKEN)))
        .await
        .unwrap();

    let detail = json_body(
        router
            .clone()
            .oneshot(request("GET", "/recipes/2", Some(ANNA_TOKEN)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(detail["is_favorited"], true);
    assert_eq!(detail["is_in_shopping_cart"], false);

    let listing = json_body(
        router
            .oneshot(request("GET", "/recipes?is_favorited=1", Some(ANNA_TOKEN)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(listing, json!([{
        "id": 2,
        "name": "Egg bread",
        "image": "recipes/images/pancakes.png",
        "cooking_time": 20
    }]));
}

#[tokio::test]
async fn short_link_round_trip() {
    let test_app = make_test_state().await;
    let router = app(&test_app);

    let link = json_body(
        router
            .clone()
            .oneshot(request("GET", "/recipes/1/get-link", None))
            .await
            .unwrap(),
    )
    .await;
    let short = link["short-link"].as_str().unwrap().to_string();
    assert_eq!(short, "https://foodgram.example/s/1");

    let path = short.trim_start_matches("https://foodgram.example");
    let response = router.oneshot(request("GET", path, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[LOCATION], "/recipes/1");
}

#[tokio::test]
async fn deleting_a_recipe_empties_every_cart_holding_it() {
    let test_app = make_test_state().await;
    let router = app(&test_app);

    router
        .clone()
        .oneshot(request("POST", "/recipes/1/shopping_cart", Some(BOB_TOKEN)))
        .await
        .unwrap();

    let response = router
        .clone()
        .oneshot(request("DELETE", "/recipes/1", Some(BOB_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = router
        .clone()
        .oneshot(request("DELETE", "/recipes/1", Some(ANNA_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(request("GET", "/recipes/download_shopping_cart", Some(BOB_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_adds_succeed_when_ignored() {
    let test_app = make_test_state_with_policy(DuplicateAddPolicy::Ignore).await;
    let router = app(&test_app);

    let first = router
        .clone()
        .oneshot(request("POST", "/recipes/1/favorite", Some(ANNA_TOKEN)))
        .await
        .unwrap();
    let second = router
        .oneshot(request("POST", "/recipes/1/favorite", Some(ANNA_TOKEN)))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::OK);
}

#[tokio::test]
async fn graphql_mutations_and_shopping_list() {
    let test_app = make_test_state().await;
    let router = app(&test_app);

    for recipe in [1, 2] {
        let mutation = format!(
            "mutation {{ addInteraction(recipeId: {recipe}, kind: SHOPPING_CART) {{ id name }} }}"
        );
        let body = json_body(router.clone().oneshot(gql(&mutation, Some(ANNA_TOKEN))).await.unwrap()).await;
        assert_eq!(body["data"]["addInteraction"]["id"], recipe);
    }

    let body = json_body(
        router
            .clone()
            .oneshot(gql("{ shoppingList { line totalAmount } }", Some(ANNA_TOKEN)))
            .await
            .unwrap(),
    )
    .await;
    let lines: Vec<&str> = body["data"]["shoppingList"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["line"].as_str().unwrap())
        .collect();
    assert_eq!(lines, vec!["Egg (pcs) — 2", "Flour (g) — 300", "Sugar (g) — 50"]);
    assert_eq!(body["data"]["shoppingList"][1]["totalAmount"], "300");

    let body = json_body(
        router
            .clone()
            .oneshot(gql(
                "mutation { removeInteraction(recipeId: 1, kind: FAVORITE) }",
                Some(ANNA_TOKEN),
            ))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(body["errors"][0]["message"], "Recipe is not in favorites");

    let body = json_body(
        router
            .oneshot(gql("{ recipe(id: 2) { name isInShoppingCart isFavorited } }", Some(ANNA_TOKEN)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(body["data"]["recipe"]["isInShoppingCart"], true);
    assert_eq!(body["data"]["recipe"]["isFavorited"], false);
}

#[tokio::test]
async fn graphql_requires_a_user_for_the_shopping_list() {
    let test_app = make_test_state().await;
    let body = json_body(
        app(&test_app)
            .oneshot(gql("{ shoppingList { line } }", None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(
        body["errors"][0]["message"],
        "Authentication credentials were not provided."
    );
}

#[tokio::test]
async fn graphql_hides_backend_failures() {
    let test_app = make_offline_store_state().await;
    let body = json_body(
        app(&test_app)
            .oneshot(gql(
                "mutation { addInteraction(recipeId: 1, kind: FAVORITE) { id } }",
                Some(ANNA_TOKEN),
            ))
            .await
            .unwrap(),
    )
    .await;

    let message = body["errors"][0]["message"].as_str().unwrap();
    assert_eq!(message, "A server error occurred.");
    assert!(!message.contains("offline"));
}

#[rstest]
#[case("GET", "/recipes/abc")]
#[case("POST", "/recipes/abc/favorite")]
#[case("DELETE", "/recipes/-1/shopping_cart")]
#[case("GET", "/recipes/1x/get-link")]
#[case("GET", "/s/99999999999999999999")]
#[tokio::test]
async fn non_numeric_ids_are_not_found(#[case] method: &str, #[case] uri: &str) {
    let test_app = make_test_state().await;
    let response = app(&test_app)
        .oneshot(request(method, uri, Some(ANNA_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["detail"], "Not found.");
}

#[tokio::test]
async fn following_authors_from_subscribe_to_unsubscribe() {
    let test_app = make_test_state().await;
    let router = app(&test_app);

    for author in [3, 1] {
        let response = router
            .clone()
            .oneshot(request("POST", &format!("/users/{author}/subscribe"), Some(BOB_TOKEN)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = router
        .clone()
        .oneshot(request("POST", "/users/2/subscribe", Some(BOB_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["detail"], "You cannot subscribe to yourself");

    let body = json_body(
        router
            .clone()
            .oneshot(request("GET", "/users/subscriptions?recipes_limit=1", Some(BOB_TOKEN)))
            .await
            .unwrap(),
    )
    .await;
    let cards = body.as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["email"], "carol@example.com");
    assert_eq!(cards[0]["recipes_count"], 0);
    assert_eq!(cards[1]["id"], 1);
    assert_eq!(cards[1]["recipes"].as_array().unwrap().len(), 1);
    assert_eq!(cards[1]["recipes_count"], 2);

    let response = router
        .clone()
        .oneshot(request("DELETE", "/users/3/subscribe", Some(BOB_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .clone()
        .oneshot(request("DELETE", "/users/3/subscribe", Some(BOB_TOKEN)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["detail"],
        "You are not subscribed to this user"
    );

    let body = json_body(
        router
            .oneshot(request("GET", "/users/subscriptions", Some(BOB_TOKEN)))
            .await
            .unwrap(),
    )
    .await;
    let authors: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["id"].as_u64().unwrap())
        .collect();
    assert_eq!(authors, vec![1]);
}
