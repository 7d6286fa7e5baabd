use crate::modules::time_entries::core::entry::{NewTimeEntry, Project, TimeEntryRow};
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::record_store::StoreError;
use async_trait::async_trait;
use chrono::NaiveDate;

pub const TIME_ENTRIES_TABLE: &str = "time_entries";
pub const PROJECTS_TABLE: &str = "projects";

#[async_trait]
pub trait TimeEntryStore: Send + Sync {
    async fn list_by_day(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<TimeEntryRow>, StoreError>;

    /// Hours of every entry dated within `start..=end`.
    async fn list_hours_between(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<f64>, StoreError>;

    async fn delete_by_day(&self, user_id: &UserId, date: NaiveDate) -> Result<(), StoreError>;

    async fn insert_many(&self, rows: Vec<NewTimeEntry>) -> Result<(), StoreError>;

    /// Replace every entry of `(user_id, date)` with `rows`.
    ///
    /// The default is delete-then-insert: if the insert fails the day is left
    /// empty. Stores with transactions should override this with a single
    /// atomic write.
    async fn replace_day(
        &self,
        user_id: &UserId,
        date: NaiveDate,
        rows: Vec<NewTimeEntry>,
    ) -> Result<(), StoreError> {
        self.delete_by_day(user_id, date).await?;
        if rows.is_empty() {
            return Ok(());
        }
        self.insert_many(rows).await
    }
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list_ordered_by_code(&self) -> Result<Vec<Project>, StoreError>;
}
