use crate::modules::time_entries::core::entry::{NewTimeEntry, Project};
use crate::shared::core::primitives::UserId;
use chrono::NaiveDate;

/// Three projects, deliberately not in `code` order.
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "prj-b".to_string(),
            name: "Billing".to_string(),
            code: "P-200".to_string(),
        },
        Project {
            id: "prj-a".to_string(),
            name: "Admin".to_string(),
            code: "P-100".to_string(),
        },
        Project {
            id: "prj-c".to_string(),
            name: "Consulting".to_string(),
            code: "P-300".to_string(),
        },
    ]
}

pub fn new_entry(user_id: &str, date: NaiveDate, project_id: &str, hours: f64) -> NewTimeEntry {
    NewTimeEntry {
        project_id: project_id.to_string(),
        user_id: UserId::new(user_id),
        date,
        hours,
    }
}

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
