use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::interactions::use_cases::errors::InteractionError;
use crate::modules::interactions::use_cases::list_recipes::handler::MembershipFilter;
use crate::shell::auth::MaybeUser;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListRecipesParams {
    pub is_favorited: Option<String>,
    pub is_in_shopping_cart: Option<String>,
}

/// Accepts `1`/`0` as sent by the web client and `true`/`false`.
fn parse_flag(name: &str, raw: Option<&str>) -> Result<Option<bool>, InteractionError> {
    match raw {
        None => Ok(None),
        Some("1") | Some("true") => Ok(Some(true)),
        Some("0") | Some("false") => Ok(Some(false)),
        Some(_) => Err(InteractionError::InvalidQuery(format!(
            "{name} must be one of 0, 1, true, false"
        ))),
    }
}

fn membership_filter(params: &ListRecipesParams) -> Result<MembershipFilter, InteractionError> {
    Ok(MembershipFilter {
        is_favorited: parse_flag("is_favorited", params.is_favorited.as_deref())?,
        is_in_shopping_cart: parse_flag(
            "is_in_shopping_cart",
            params.is_in_shopping_cart.as_deref(),
        )?,
    })
}

pub async fn handle(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Query(params): Query<ListRecipesParams>,
) -> Response {
    let filter = match membership_filter(&params) {
        Ok(filter) => filter,
        Err(e) => return e.into_response(),
    };

    match state
        .list_recipes_handler
        .handle(user.map(|u| u.id), filter)
        .await
    {
        Ok(recipes) => Json(recipes).into_response(),
        Err(e) => e.into_response(),
    }
}
