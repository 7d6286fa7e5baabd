// In-memory implementation of the time entry and project ports.
//
// Replaces a day under one write lock, so `replace_day` is atomic here.
// `toggle_failing_inserts` lets tests see what a failed insert does.

use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    ProjectStore, TimeEntryStore,
};
use crate::modules::time_entries::core::entry::{NewTimeEntry, Project, TimeEntryRow};
use crate::shared::core::primitives::UserId;
use crate::shared::infrastructure::record_store::StoreError;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryTimeEntryStore {
    rows: RwLock<Vec<TimeEntryRow>>,
    projects: RwLock<Vec<Project>>,
    is_offline: bool,
    inserts_fail: bool,
}

impl InMemoryTimeEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: RwLock::new(projects),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn toggle_failing_inserts(&mut self) {
        self.inserts_fail = !self.inserts_fail;
    }

    pub async fn rows(&self) -> Vec<TimeEntryRow> {
        self.rows.read().await.clone()
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Time entry store offline".into()));
        }
        Ok(())
    }

    fn ensure_insertable(&self) -> Result<(), StoreError> {
        self.ensure_online()?;
        if self.inserts_fail {
            return Err(StoreError::Backend("Time entry insert rejected".into()));
        }
        Ok(())
    }

    fn to_row(entry: NewTimeEntry) -> TimeEntryRow {
        TimeEntryRow {
            id: Uuid::now_v7().to_string(),
            user_id: entry.user_id,
            project_id: entry.project_id,
            date: entry.date,
            hours: entry.hours,
            project: None,
        }
    }
}

#[async_trait::async_trait]
impl TimeEntryStore for InMemoryTimeEntryStore {
    async fn list_by_day(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Vec<TimeEntryRow>, StoreError> {
        self.ensure_online()?;
        let projects = self.projects.read().await;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| &row.user_id == user_id && row.date == date)
            .map(|row| TimeEntryRow {
                project: projects.iter().find(|p| p.id == row.project_id).cloned(),
                ..row.clone()
            })
            .collect())
    }

    async fn list_hours_between(
        &self,
        user_id: &UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<f64>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| &row.user_id == user_id && row.date >= start && row.date <= end)
            .map(|row| row.hours)
            .collect())
    }

    async fn delete_by_day(&self, user_id: &UserId, date: NaiveDate) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.rows
            .write()
            .await
            .retain(|row| !(&row.user_id == user_id && row.date == date));
        Ok(())
    }

    async fn insert_many(&self, rows: Vec<NewTimeEntry>) -> Result<(), StoreError> {
        self.ensure_insertable()?;
        self.rows
            .write()
            .await
            .extend(rows.into_iter().map(Self::to_row));
        Ok(())
    }

    async fn replace_day(
        &self,
        user_id: &UserId,
        date: NaiveDate,
        rows: Vec<NewTimeEntry>,
    ) -> Result<(), StoreError> {
        if rows.is_empty() {
            self.ensure_online()?;
        } else {
            self.ensure_insertable()?;
        }
        let mut guard = self.rows.write().await;
        guard.retain(|row| !(&row.user_id == user_id && row.date == date));
        guard.extend(rows.into_iter().map(Self::to_row));
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProjectStore for InMemoryTimeEntryStore {
    async fn list_ordered_by_code(&self) -> Result<Vec<Project>, StoreError> {
        self.ensure_online()?;
        let mut projects = self.projects.read().await.clone();
        projects.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(projects)
    }
}

#[cfg(test)]
mod in_memory_time_entry_store_tests {
    use super::*;
    use crate::tests::fixtures::time_entries::{new_entry, projects, ymd};
    use rstest::{fixture, rstest};

    #[fixture]
    fn user_id() -> UserId {
        UserId::new("user-fixed-0001")
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_projects_ordered_by_code() {
        let store = InMemoryTimeEntryStore::with_projects(projects());
        let codes: Vec<String> = store
            .list_ordered_by_code()
            .await
            .unwrap()
            .into_iter()
            .map(|project| project.code)
            .collect();
        assert_eq!(codes, vec!["P-100", "P-200", "P-300"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_join_the_project_when_listing_a_day(user_id: UserId) {
        let store = InMemoryTimeEntryStore::with_projects(projects());
        store
            .insert_many(vec![new_entry("user-fixed-0001", ymd(2024, 6, 10), "prj-c", 2.0)])
            .await
            .unwrap();

        let rows = store.list_by_day(&user_id, ymd(2024, 6, 10)).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].project.as_ref().map(|p| p.name.as_str()), Some("Consulting"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_only_delete_the_given_day_of_the_given_user(user_id: UserId) {
        let store = InMemoryTimeEntryStore::new();
        store
            .insert_many(vec![
                new_entry("user-fixed-0001", ymd(2024, 6, 10), "prj-a", 1.0),
                new_entry("user-fixed-0001", ymd(2024, 6, 11), "prj-a", 1.0),
                new_entry("someone-else", ymd(2024, 6, 10), "prj-a", 1.0),
            ])
            .await
            .unwrap();

        store.delete_by_day(&user_id, ymd(2024, 6, 10)).await.unwrap();

        let remaining = store.rows().await;
        assert_eq!(remaining.len(), 2);
        assert!(
            remaining
                .iter()
                .all(|row| !(row.user_id == user_id && row.date == ymd(2024, 6, 10)))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_day_intact_when_an_atomic_replace_fails(user_id: UserId) {
        let mut store = InMemoryTimeEntryStore::new();
        store
            .insert_many(vec![new_entry("user-fixed-0001", ymd(2024, 6, 10), "prj-a", 3.0)])
            .await
            .unwrap();
        store.toggle_failing_inserts();

        let result = store
            .replace_day(
                &user_id,
                ymd(2024, 6, 10),
                vec![new_entry("user-fixed-0001", ymd(2024, 6, 10), "prj-b", 1.0)],
            )
            .await;

        assert!(result.is_err());
        let rows = store.rows().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hours, 3.0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_store_is_offline(user_id: UserId) {
        let mut store = InMemoryTimeEntryStore::new();
        store.toggle_offline();
        let result = store
            .list_hours_between(&user_id, ymd(2024, 3, 1), ymd(2024, 3, 31))
            .await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Time entry store offline")
        );
    }
}
