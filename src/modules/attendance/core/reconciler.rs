use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::core::record::{AttendanceRecord, WorkType};
use crate::modules::attendance::use_cases::toggle_attendance::{
    command::ToggleAttendance,
    decide::decide_toggle,
    decision::{AttendanceWrite, ToggleOutcome},
};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::{UserContext, UserId};
use chrono::NaiveDate;
use std::sync::Arc;

/// Holds every attendance record of the signed-in user and applies toggles
/// through the store. Local state is only ever replaced by a fresh read, so
/// a failed write leaves it as it was.
///
/// The records belong to `owner`. Calls on behalf of anyone else reload
/// first.
pub struct AttendanceReconciler {
    store: Arc<dyn AttendanceStore>,
    owner: Option<UserId>,
    records: Vec<AttendanceRecord>,
}

impl AttendanceReconciler {
    pub fn new(store: Arc<dyn AttendanceStore>) -> Self {
        Self {
            store,
            owner: None,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn owner(&self) -> Option<&UserId> {
        self.owner.as_ref()
    }

    pub async fn load(&mut self, user: &UserContext) -> Result<(), ApplicationError> {
        self.records = self.store.list_by_user(&user.user_id).await?;
        self.owner = Some(user.user_id.clone());
        tracing::debug!(user_id = %user.user_id, count = self.records.len(), "attendance records loaded");
        Ok(())
    }

    /// Loads `user`'s records unless they are the ones already held.
    pub async fn load_for(&mut self, user: &UserContext) -> Result<(), ApplicationError> {
        if self.owner.as_ref() == Some(&user.user_id) {
            return Ok(());
        }
        self.load(user).await
    }

    pub fn clear(&mut self) {
        self.owner = None;
        self.records.clear();
    }

    pub fn has_attendance(&self, day: NaiveDate) -> bool {
        self.attending_record(day).is_some()
    }

    pub fn current_work_type(&self, day: NaiveDate) -> Option<WorkType> {
        self.attending_record(day).and_then(|record| record.work_type)
    }

    /// Dates marked present, ascending. Drives the calendar highlight.
    pub fn attended_days(&self) -> Vec<NaiveDate> {
        let mut days: Vec<NaiveDate> = self
            .records
            .iter()
            .filter(|record| record.is_attendance)
            .map(|record| record.date)
            .collect();
        days.sort_unstable();
        days.dedup();
        days
    }

    pub async fn toggle_attendance(
        &mut self,
        user: &UserContext,
        command: ToggleAttendance,
    ) -> Result<ToggleOutcome, ApplicationError> {
        self.load_for(user).await?;
        let date = command.date;
        let decision = decide_toggle(&self.records, user, command);

        match decision.write {
            AttendanceWrite::Update { id, patch } => self.store.update(&id, patch).await?,
            AttendanceWrite::Insert(record) => self.store.insert(record).await?,
        }
        self.records = self.store.list_by_user(&user.user_id).await?;

        tracing::info!(user_id = %user.user_id, %date, outcome = ?decision.outcome, "attendance toggled");
        Ok(decision.outcome)
    }

    fn attending_record(&self, day: NaiveDate) -> Option<&AttendanceRecord> {
        self.records
            .iter()
            .find(|record| record.date == day && record.is_attendance)
    }
}
