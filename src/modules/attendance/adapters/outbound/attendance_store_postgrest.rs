use crate::modules::attendance::adapters::outbound::attendance_store::{
    ATTENDANCE_TABLE, AttendanceStore,
};
use crate::modules::attendance::core::record::{
    AttendancePatch, AttendanceRecord, NewAttendanceRecord,
};
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::record_store::StoreError;
use crate::shared::infrastructure::record_store::postgrest::{Filter, PostgrestClient};
use async_trait::async_trait;
use std::sync::Arc;

const COLUMNS: &str = "id,user_id,date,is_attendance,work_type";

pub struct PostgrestAttendanceStore {
    client: Arc<PostgrestClient>,
}

impl PostgrestAttendanceStore {
    pub fn new(client: Arc<PostgrestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AttendanceStore for PostgrestAttendanceStore {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.client
            .select(
                ATTENDANCE_TABLE,
                COLUMNS,
                &[Filter::Eq("user_id", user_id.to_string())],
                None,
            )
            .await
    }

    async fn insert(&self, record: NewAttendanceRecord) -> Result<(), StoreError> {
        self.client.insert(ATTENDANCE_TABLE, &[record]).await
    }

    async fn update(&self, id: &str, patch: AttendancePatch) -> Result<(), StoreError> {
        self.client
            .update(ATTENDANCE_TABLE, &[Filter::Eq("id", id.to_string())], &patch)
            .await
    }
}
