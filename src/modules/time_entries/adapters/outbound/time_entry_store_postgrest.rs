use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    PROJECTS_TABLE, ProjectStore, TIME_ENTRIES_TABLE, TimeEntryStore,
};
use crate::modules::time_entries::core::entry::{NewTimeEntry, Project, TimeEntryRow};
use crate::shared::core::primitives::{UserId, format_date};
use crate::shared::infrastructure::record_store::StoreError;
use crate::shared::infrastructure::record_store::postgrest::{Filter, PostgrestClient};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

const ENTRY_COLUMNS: &str = "*,project:projects(*)";
const PROJECT_COLUMNS: &str = "id,name,code";

#[derive(Deserialize)]
struct HoursRow {
    hours: f64,
}

/// PostgREST has no multi-statement transactions over plain table calls, so
/// `replace_day` keeps the trait's two-step default.
pub struct PostgrestTimeEntryStore {
    client: Arc<PostgrestClient>,
}

impl PostgrestTimeEntryStore {
    pub fn new(client: Arc<PostgrestClient>) -> Self {
        Self { client }
    }
}

fn day_filters(user_id: &UserId, date: NaiveDate) -> [Filter; 2] {
    [
        Filter::Eq("user_id", user_id.to_string()),
        Filter::Eq("date", format_date(date)),
    ]
}

#[async_trait]
impl TimeEntryStore for PostgrestTimeEntryStore {
    async fn list_by_day(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<TimeEntryRow>, StoreError> {
        self.client
            .select(TIME_ENTRIES_TABLE, ENTRY_COLUMNS, &day_filters(user_id, date), None)
            .await
    }

    async fn list_hours_between(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<f64>, StoreError> {
        let rows: Vec<HoursRow> = self
            .client
            .select(
                TIME_ENTRIES_TABLE,
                "hours",
                &[
                    Filter::Eq("user_id", user_id.to_string()),
                    Filter::Gte("date", format_date(start)),
                    Filter::Lte("date", format_date(end)),
                ],
                None,
            )
            .await?;
        Ok(rows.into_iter().map(|row| row.hours).collect())
    }

    async fn delete_by_day(&self, user_id: &UserId, date: NaiveDate) -> Result<(), StoreError> {
        self.client
            .delete(TIME_ENTRIES_TABLE, &day_filters(user_id, date))
            .await
    }

    async fn insert_many(&self, rows: Vec<NewTimeEntry>) -> Result<(), StoreError> {
        self.client.insert(TIME_ENTRIES_TABLE, &rows).await
    }
}

#[async_trait]
impl ProjectStore for PostgrestTimeEntryStore {
    async fn list_ordered_by_code(&self) -> Result<Vec<Project>, StoreError> {
        self.client
            .select(PROJECTS_TABLE, PROJECT_COLUMNS, &[], Some("code"))
            .await
    }
}
