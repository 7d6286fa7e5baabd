use crate::modules::attendance::core::record::{
    AttendancePatch, AttendanceRecord, NewAttendanceRecord,
};
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::record_store::StoreError;
use async_trait::async_trait;

pub const ATTENDANCE_TABLE: &str = "attendance_records";

#[async_trait]
pub trait AttendanceStore: Send + Sync {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<AttendanceRecord>, StoreError>;
    async fn insert(&self, record: NewAttendanceRecord) -> Result<(), StoreError>;
    async fn update(&self, id: &str, patch: AttendancePatch) -> Result<(), StoreError>;
}
