use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::use_cases::monthly_total::handler::month_bounds;
use crate::shared::core::notice::Notice;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MonthlyParams {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct MonthlyTotalView {
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
    pub total_hours: f64,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<MonthlyParams>,
) -> impl IntoResponse {
    let user = match state.current_user().await {
        Ok(user) => user,
        Err(notice) => return notice.into_response(),
    };
    let (month_start, month_end) = month_bounds(params.date);
    match state.monthly.monthly_total(&user, params.date).await {
        Ok(total_hours) => Json(MonthlyTotalView {
            month_start,
            month_end,
            total_hours,
        })
        .into_response(),
        Err(error) => Notice::failure("fetching monthly hours", &error).into_response(),
    }
}
