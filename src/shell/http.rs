use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::attendance::use_cases::query_attendance::inbound::http as query_attendance_http;
use crate::modules::attendance::use_cases::toggle_attendance::inbound::http as toggle_http;
use crate::modules::attendance::use_cases::track_session::inbound::http as session_http;
use crate::modules::time_entries::use_cases::edit_ledger::inbound::http as ledger_http;
use crate::modules::time_entries::use_cases::monthly_total::inbound::http as monthly_http;
use crate::shared::core::notice::{Notice, NoticeKind};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/auth/sign-in", post(session_http::sign_in))
        .route("/auth/sign-out", post(session_http::sign_out))
        .route("/attendance", get(query_attendance_http::handle))
        .route("/attendance/days", get(query_attendance_http::attended_days))
        .route("/attendance/toggle", post(toggle_http::handle))
        .route("/projects", get(ledger_http::projects))
        .route("/ledger", get(ledger_http::show).delete(ledger_http::remove_all))
        .route("/ledger/load", post(ledger_http::load))
        .route("/ledger/rows", post(ledger_http::add_row))
        .route(
            "/ledger/rows/{index}",
            patch(ledger_http::update_row).delete(ledger_http::remove_row),
        )
        .route("/ledger/save", post(ledger_http::save))
        .route("/stats/monthly", get(monthly_http::handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

impl IntoResponse for Notice {
    fn into_response(self) -> Response {
        let status = match self.kind {
            NoticeKind::Success => StatusCode::OK,
            NoticeKind::Failure => StatusCode::INTERNAL_SERVER_ERROR,
            NoticeKind::SignedOut => StatusCode::UNAUTHORIZED,
        };
        (status, Json(self)).into_response()
    }
}
