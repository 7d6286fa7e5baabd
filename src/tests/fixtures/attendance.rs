use crate::modules::attendance::core::record::{AttendanceRecord, WorkType};
use crate::shared::core::primitives::UserId;
use chrono::NaiveDate;

pub fn june_10() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

pub struct AttendanceRecordBuilder {
    inner: AttendanceRecord,
}

impl Default for AttendanceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AttendanceRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: AttendanceRecord {
                id: "att-fixed-0001".to_string(),
                user_id: UserId::new("user-fixed-0001"),
                date: june_10(),
                is_attendance: true,
                work_type: Some(WorkType::Office),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = UserId::new(v);
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn is_attendance(mut self, v: bool) -> Self {
        self.inner.is_attendance = v;
        self
    }

    pub fn work_type(mut self, v: Option<WorkType>) -> Self {
        self.inner.work_type = v;
        self
    }

    pub fn build(self) -> AttendanceRecord {
        self.inner
    }
}
