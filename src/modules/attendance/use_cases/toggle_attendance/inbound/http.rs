use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::attendance::use_cases::toggle_attendance::command::ToggleAttendance;
use crate::shared::core::notice::Notice;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ToggleAttendance>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let user = match state.current_user().await {
        Ok(user) => user,
        Err(notice) => return notice.into_response(),
    };

    let mut reconciler = state.reconciler.lock().await;
    match reconciler.toggle_attendance(&user, command).await {
        Ok(outcome) => Notice::success(outcome.message()).into_response(),
        Err(error) => Notice::failure("recording attendance", &error).into_response(),
    }
}
