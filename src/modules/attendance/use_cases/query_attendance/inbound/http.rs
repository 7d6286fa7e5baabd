use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::attendance::core::record::WorkType;
use crate::shared::core::notice::Notice;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AttendanceParams {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct AttendanceView {
    pub date: NaiveDate,
    pub is_attendance: bool,
    pub work_type: Option<WorkType>,
}

#[derive(Debug, Serialize)]
pub struct AttendedDaysView {
    pub days: Vec<NaiveDate>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<AttendanceParams>,
) -> impl IntoResponse {
    let user = match state.current_user().await {
        Ok(user) => user,
        Err(notice) => return notice.into_response(),
    };
    let mut reconciler = state.reconciler.lock().await;
    if let Err(error) = reconciler.load_for(&user).await {
        return Notice::failure("fetching attendance records", &error).into_response();
    }
    Json(AttendanceView {
        date: params.date,
        is_attendance: reconciler.has_attendance(params.date),
        work_type: reconciler.current_work_type(params.date),
    })
    .into_response()
}

pub async fn attended_days(State(state): State<AppState>) -> impl IntoResponse {
    let user = match state.current_user().await {
        Ok(user) => user,
        Err(notice) => return notice.into_response(),
    };
    let mut reconciler = state.reconciler.lock().await;
    if let Err(error) = reconciler.load_for(&user).await {
        return Notice::failure("fetching attendance records", &error).into_response();
    }
    Json(AttendedDaysView {
        days: reconciler.attended_days(),
    })
    .into_response()
}
