use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::core::entry::{RowEdit, TimeEntry};
use crate::modules::time_entries::core::ledger::TimeLedger;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::notice::Notice;
use crate::shared::core::primitives::{DayKey, UserContext};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoadBody {
    pub date: NaiveDate,
}

#[derive(Deserialize)]
pub struct RowEditBody {
    pub project_id: Option<String>,
    pub hours: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct LedgerView {
    pub date: Option<NaiveDate>,
    pub entries: Vec<TimeEntry>,
    pub total_hours: f64,
}

impl LedgerView {
    fn empty() -> Self {
        Self {
            date: None,
            entries: Vec::new(),
            total_hours: 0.0,
        }
    }
}

impl From<&TimeLedger> for LedgerView {
    fn from(ledger: &TimeLedger) -> Self {
        Self {
            date: ledger.day().map(|day| day.date),
            entries: ledger.entries().to_vec(),
            total_hours: ledger.total_hours(),
        }
    }
}

/// The day the ledger holds, if it belongs to `user`.
fn owned_day(ledger: &TimeLedger, user: &UserContext) -> Option<DayKey> {
    ledger
        .day()
        .filter(|day| day.user_id == user.user_id)
        .cloned()
}

fn row_error(error: ApplicationError) -> Response {
    match error {
        ApplicationError::RowOutOfRange(_) => StatusCode::NOT_FOUND.into_response(),
        other => Notice::failure("editing time entries", &other).into_response(),
    }
}

pub async fn projects(State(state): State<AppState>) -> impl IntoResponse {
    if let Err(notice) = state.current_user().await {
        return notice.into_response();
    }
    Json(state.ledger.lock().await.projects().to_vec()).into_response()
}

/// Another user's day reads as nothing loaded.
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let user = match state.current_user().await {
        Ok(user) => user,
        Err(notice) => return notice.into_response(),
    };
    let ledger = state.ledger.lock().await;
    if ledger.day().is_some() && owned_day(&ledger, &user).is_none() {
        return Json(LedgerView::empty()).into_response();
    }
    Json(LedgerView::from(&*ledger)).into_response()
}

pub async fn load(
    State(state): State<AppState>,
    body: Result<Json<LoadBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let user = match state.current_user().await {
        Ok(user) => user,
        Err(notice) => return notice.into_response(),
    };

    let mut ledger = state.ledger.lock().await;
    match ledger.load(DayKey::new(&user, body.date)).await {
        Ok(()) => Json(LedgerView::from(&*ledger)).into_response(),
        Err(error) => Notice::failure("fetching time entries", &error).into_response(),
    }
}

pub async fn add_row(State(state): State<AppState>) -> impl IntoResponse {
    let user = match state.current_user().await {
        Ok(user) => user,
        Err(notice) => return notice.into_response(),
    };
    let mut ledger = state.ledger.lock().await;
    if owned_day(&ledger, &user).is_none() {
        return StatusCode::CONFLICT.into_response();
    }
    ledger.add_row();
    Json(LedgerView::from(&*ledger)).into_response()
}

pub async fn update_row(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    body: Result<Json<RowEditBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    if body.project_id.is_none() && body.hours.is_none() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    let user = match state.current_user().await {
        Ok(user) => user,
        Err(notice) => return notice.into_response(),
    };

    let mut ledger = state.ledger.lock().await;
    if owned_day(&ledger, &user).is_none() {
        return StatusCode::CONFLICT.into_response();
    }
    let edits = body
        .project_id
        .map(RowEdit::Project)
        .into_iter()
        .chain(body.hours.map(RowEdit::Hours));
    for edit in edits {
        if let Err(error) = ledger.update_row(index, edit) {
            return row_error(error);
        }
    }
    Json(LedgerView::from(&*ledger)).into_response()
}

pub async fn remove_row(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> impl IntoResponse {
    let user = match state.current_user().await {
        Ok(user) => user,
        Err(notice) => return notice.into_response(),
    };
    let mut ledger = state.ledger.lock().await;
    if owned_day(&ledger, &user).is_none() {
        return StatusCode::CONFLICT.into_response();
    }
    match ledger.remove_row(index) {
        Ok(_) => Json(LedgerView::from(&*ledger)).into_response(),
        Err(error) => row_error(error),
    }
}

pub async fn save(State(state): State<AppState>) -> impl IntoResponse {
    let user = match state.current_user().await {
        Ok(user) => user,
        Err(notice) => return notice.into_response(),
    };
    let ledger = state.ledger.lock().await;
    let Some(day) = owned_day(&ledger, &user) else {
        return StatusCode::CONFLICT.into_response();
    };
    match ledger.save(&day).await {
        Ok(()) => Notice::success("Time entries saved.").into_response(),
        Err(error) => Notice::failure("saving time entries", &error).into_response(),
    }
}

pub async fn remove_all(State(state): State<AppState>) -> impl IntoResponse {
    let user = match state.current_user().await {
        Ok(user) => user,
        Err(notice) => return notice.into_response(),
    };
    let mut ledger = state.ledger.lock().await;
    let Some(day) = owned_day(&ledger, &user) else {
        return StatusCode::CONFLICT.into_response();
    };
    match ledger.remove_all(&day).await {
        Ok(()) => Notice::success("Time entries deleted.").into_response(),
        Err(error) => Notice::failure("deleting time entries", &error).into_response(),
    }
}
