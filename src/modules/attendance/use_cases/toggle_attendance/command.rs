use crate::modules::attendance::core::record::WorkType;
use chrono::NaiveDate;
use serde::Deserialize;

/// Flip attendance for `date`. `work_type` is only used when the flip turns
/// attendance on; the clear action carries none.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToggleAttendance {
    pub date: NaiveDate,
    #[serde(default)]
    pub work_type: Option<WorkType>,
}
