use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::Html,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::modules::interactions::use_cases::add_interaction::inbound::http as add_http;
use crate::modules::interactions::use_cases::delete_recipe::inbound::http as delete_recipe_http;
use crate::modules::interactions::use_cases::download_shopping_list::inbound::http as download_http;
use crate::modules::interactions::use_cases::get_recipe::inbound::http as get_recipe_http;
use crate::modules::interactions::use_cases::list_recipes::inbound::http as list_recipes_http;
use crate::modules::interactions::use_cases::list_subscriptions::inbound::http as list_subscriptions_http;
use crate::modules::interactions::use_cases::remove_interaction::inbound::http as remove_http;
use crate::modules::interactions::use_cases::short_link::inbound::http as short_link_http;
use crate::modules::interactions::use_cases::subscribe::inbound::http as subscribe_http;
use crate::modules::interactions::use_cases::unsubscribe::inbound::http as unsubscribe_http;
use crate::shell::auth::MaybeUser;
use crate::shell::graphql::AppSchema;
use crate::shell::state::AppState;

pub fn router(state: AppState, schema: AppSchema) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/recipes", get(list_recipes_http::handle))
        .route(
            "/recipes/download_shopping_cart",
            get(download_http::handle),
        )
        .route(
            "/recipes/{id}",
            get(get_recipe_http::handle).delete(delete_recipe_http::handle),
        )
        .route(
            "/recipes/{id}/shopping_cart",
            post(add_http::add_to_shopping_cart).delete(remove_http::remove_from_shopping_cart),
        )
        .route(
            "/recipes/{id}/favorite",
            post(add_http::add_to_favorites).delete(remove_http::remove_from_favorites),
        )
        .route("/recipes/{id}/get-link", get(short_link_http::get_link))
        .route("/s/{id}", get(short_link_http::follow))
        .route("/users/subscriptions", get(list_subscriptions_http::handle))
        .route(
            "/users/{id}/subscribe",
            post(subscribe_http::handle).delete(unsubscribe_http::handle),
        )
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn graphql(
    Extension(schema): Extension<AppSchema>,
    MaybeUser(user): MaybeUser,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(user)).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
