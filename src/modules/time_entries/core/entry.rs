use crate::shared::core::primitives::{DayKey, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_ROW_HOURS: f64 = 1.0;
pub const MAX_HOUR_OPTION: f64 = 8.0;
pub const HOUR_STEP: f64 = 0.5;

/// Hour values offered when editing a row: 0 to 8 in half-hour steps.
/// Not enforced by the ledger itself.
pub fn hour_options() -> Vec<f64> {
    let steps = (MAX_HOUR_OPTION / HOUR_STEP) as u32;
    (0..=steps).map(|step| f64::from(step) * HOUR_STEP).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub code: String,
}

/// Identity of a ledger row. Rows added in memory carry a `Local` id until
/// the store assigns a `Persisted` one on the next load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum EntryId {
    Local(Uuid),
    Persisted(String),
}

impl EntryId {
    pub fn new_local() -> Self {
        EntryId::Local(Uuid::now_v7())
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self, EntryId::Persisted(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub id: EntryId,
    pub user_id: UserId,
    pub project_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    /// Display join against the project list. Not authoritative.
    pub project: Option<Project>,
}

impl TimeEntry {
    /// Insert payload for `day`, dropping the row's id so the store
    /// assigns its own.
    pub fn to_new(&self, day: &DayKey) -> NewTimeEntry {
        NewTimeEntry {
            project_id: self.project_id.clone(),
            user_id: day.user_id.clone(),
            date: day.date,
            hours: self.hours,
        }
    }
}

/// `time_entries` row as the store returns it, project joined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryRow {
    pub id: String,
    pub user_id: UserId,
    pub project_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    #[serde(default)]
    pub project: Option<Project>,
}

impl From<TimeEntryRow> for TimeEntry {
    fn from(row: TimeEntryRow) -> Self {
        Self {
            id: EntryId::Persisted(row.id),
            user_id: row.user_id,
            project_id: row.project_id,
            date: row.date,
            hours: row.hours,
            project: row.project,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTimeEntry {
    pub project_id: String,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowEdit {
    Project(String),
    Hours(f64),
}
