use crate::shared::core::primitives::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    Home,
    Office,
    Outside,
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WorkType::Home => "home",
            WorkType::Office => "office",
            WorkType::Outside => "outside",
        })
    }
}

/// One user's presence for one calendar date, as stored in
/// `attendance_records`. `work_type` only means something while
/// `is_attendance` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub is_attendance: bool,
    pub work_type: Option<WorkType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendanceRecord {
    pub user_id: UserId,
    pub date: NaiveDate,
    pub is_attendance: bool,
    pub work_type: Option<WorkType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePatch {
    pub is_attendance: bool,
    pub work_type: Option<WorkType>,
}
