use crate::modules::attendance::core::record::{
    AttendancePatch, AttendanceRecord, NewAttendanceRecord,
};
use crate::modules::attendance::use_cases::toggle_attendance::{
    command::ToggleAttendance,
    decision::{AttendanceWrite, Decision, ToggleOutcome},
};
use crate::shared::core::primitives::UserContext;

/// Decide the store write for a toggle against the user's current records.
///
/// Only `user`'s own records are considered. An existing record for the
/// date, preferably the attending one, is flipped in place; otherwise a new
/// attending record is inserted. Turning attendance off always clears the
/// work type, even when a different mode was requested.
pub fn decide_toggle(
    records: &[AttendanceRecord],
    user: &UserContext,
    command: ToggleAttendance,
) -> Decision {
    let mut same_day = records
        .iter()
        .filter(|record| record.user_id == user.user_id && record.date == command.date);
    let attending = same_day.clone().find(|record| record.is_attendance);
    let was_attending = attending.is_some();
    let existing = attending.or_else(|| same_day.next());

    let work_type = if was_attending {
        None
    } else {
        command.work_type
    };
    let outcome = if was_attending {
        ToggleOutcome::Cleared
    } else {
        ToggleOutcome::Registered(work_type)
    };

    let write = match existing {
        Some(record) => AttendanceWrite::Update {
            id: record.id.clone(),
            patch: AttendancePatch {
                is_attendance: !was_attending,
                work_type,
            },
        },
        None => AttendanceWrite::Insert(NewAttendanceRecord {
            user_id: user.user_id.clone(),
            date: command.date,
            is_attendance: true,
            work_type,
        }),
    };

    Decision { write, outcome }
}
