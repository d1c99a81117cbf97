use axum::{
    extract::State,
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};

use crate::modules::interactions::use_cases::download_shopping_list::handler::SHOPPING_LIST_FILENAME;
use crate::shell::auth::RequireUser;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, RequireUser(user): RequireUser) -> Response {
    match state.download_handler.handle(user.id).await {
        Ok(list) => (
            StatusCode::OK,
            [
                (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{SHOPPING_LIST_FILENAME}\""),
                ),
            ],
            list.to_text(),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
