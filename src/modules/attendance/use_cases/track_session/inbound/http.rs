// Sign-in stand-in. The real sign-in happens in an external identity flow;
// these routes let local runs and tests drive the in-memory provider.

use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignInBody {
    pub user_id: String,
}

pub async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<SignInBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if body.user_id.trim().is_empty() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    let user = state.identity.sign_in(body.user_id).await;
    Json(user).into_response()
}

pub async fn sign_out(State(state): State<AppState>) -> impl IntoResponse {
    state.identity.sign_out().await;
    StatusCode::NO_CONTENT
}
