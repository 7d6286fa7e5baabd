use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::core::record::{
    AttendancePatch, AttendanceRecord, NewAttendanceRecord,
};
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::record_store::StoreError;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryAttendanceStore {
    rows: RwLock<Vec<AttendanceRecord>>,
    reads: AtomicUsize,
    is_offline: bool,
}

impl InMemoryAttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn seed(&self, record: AttendanceRecord) {
        self.rows.write().await.push(record);
    }

    pub async fn rows(&self) -> Vec<AttendanceRecord> {
        self.rows.read().await.clone()
    }

    /// Number of `list_by_user` calls served so far.
    #[cfg(test)]
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Attendance store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AttendanceStore for InMemoryAttendanceStore {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.ensure_online()?;
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| &row.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, record: NewAttendanceRecord) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.rows.write().await.push(AttendanceRecord {
            id: Uuid::now_v7().to_string(),
            user_id: record.user_id,
            date: record.date,
            is_attendance: record.is_attendance,
            work_type: record.work_type,
        });
        Ok(())
    }

    async fn update(&self, id: &str, patch: AttendancePatch) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let row = guard
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        row.is_attendance = patch.is_attendance;
        row.work_type = patch.work_type;
        Ok(())
    }
}
