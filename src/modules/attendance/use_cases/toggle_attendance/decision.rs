use crate::modules::attendance::core::record::{
    AttendancePatch, NewAttendanceRecord, WorkType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceWrite {
    Update { id: String, patch: AttendancePatch },
    Insert(NewAttendanceRecord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Cleared,
    Registered(Option<WorkType>),
}

impl ToggleOutcome {
    pub fn message(&self) -> String {
        match self {
            ToggleOutcome::Cleared => "Attendance cleared.".to_string(),
            ToggleOutcome::Registered(Some(work_type)) => {
                format!("Attendance registered as {work_type}.")
            }
            ToggleOutcome::Registered(None) => "Attendance registered.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub write: AttendanceWrite,
    pub outcome: ToggleOutcome,
}
