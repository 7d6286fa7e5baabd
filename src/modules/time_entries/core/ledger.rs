use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    ProjectStore, TimeEntryStore,
};
use crate::modules::time_entries::core::entry::{
    DEFAULT_ROW_HOURS, EntryId, NewTimeEntry, Project, RowEdit, TimeEntry,
};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::DayKey;
use std::sync::Arc;

/// The time entries of one selected day, edited in memory and written back
/// as a whole on save.
pub struct TimeLedger {
    entries_store: Arc<dyn TimeEntryStore>,
    project_store: Arc<dyn ProjectStore>,
    projects: Vec<Project>,
    day: Option<DayKey>,
    entries: Vec<TimeEntry>,
}

impl TimeLedger {
    pub fn new(entries_store: Arc<dyn TimeEntryStore>, project_store: Arc<dyn ProjectStore>) -> Self {
        Self {
            entries_store,
            project_store,
            projects: Vec::new(),
            day: None,
            entries: Vec::new(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn day(&self) -> Option<&DayKey> {
        self.day.as_ref()
    }

    pub async fn load_projects(&mut self) -> Result<(), ApplicationError> {
        self.projects = self.project_store.list_ordered_by_code().await?;
        Ok(())
    }

    /// Replace the in-memory entries with the stored ones for `day`.
    pub async fn load(&mut self, day: DayKey) -> Result<(), ApplicationError> {
        let rows = self
            .entries_store
            .list_by_day(&day.user_id, day.date)
            .await?;
        self.entries = rows.into_iter().map(TimeEntry::from).collect();
        tracing::debug!(user_id = %day.user_id, date = %day.date, count = self.entries.len(), "time entries loaded");
        self.day = Some(day);
        Ok(())
    }

    /// Forget the loaded day and its rows. Projects stay.
    pub fn reset(&mut self) {
        self.day = None;
        self.entries.clear();
    }

    /// Append a row for the first project by code. Returns false, without
    /// changing anything, when there is no project or no loaded day.
    pub fn add_row(&mut self) -> bool {
        let (Some(project), Some(day)) = (self.projects.first(), self.day.as_ref()) else {
            return false;
        };
        self.entries.push(TimeEntry {
            id: EntryId::new_local(),
            user_id: day.user_id.clone(),
            project_id: project.id.clone(),
            date: day.date,
            hours: DEFAULT_ROW_HOURS,
            project: Some(project.clone()),
        });
        true
    }

    pub fn update_row(&mut self, index: usize, edit: RowEdit) -> Result<(), ApplicationError> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(ApplicationError::RowOutOfRange(index))?;
        match edit {
            RowEdit::Project(project_id) => {
                entry.project = self.projects.iter().find(|p| p.id == project_id).cloned();
                entry.project_id = project_id;
            }
            RowEdit::Hours(hours) => entry.hours = hours,
        }
        Ok(())
    }

    pub fn remove_row(&mut self, index: usize) -> Result<TimeEntry, ApplicationError> {
        if index >= self.entries.len() {
            return Err(ApplicationError::RowOutOfRange(index));
        }
        Ok(self.entries.remove(index))
    }

    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(|entry| entry.hours).sum()
    }

    /// Replace everything stored for `day` with the current rows.
    pub async fn save(&self, day: &DayKey) -> Result<(), ApplicationError> {
        let rows: Vec<NewTimeEntry> = self.entries.iter().map(|entry| entry.to_new(day)).collect();
        let count = rows.len();
        self.entries_store
            .replace_day(&day.user_id, day.date, rows)
            .await?;
        tracing::info!(user_id = %day.user_id, date = %day.date, count, "time entries saved");
        Ok(())
    }

    pub async fn remove_all(&mut self, day: &DayKey) -> Result<(), ApplicationError> {
        self.entries_store
            .delete_by_day(&day.user_id, day.date)
            .await?;
        self.entries.clear();
        tracing::info!(user_id = %day.user_id, date = %day.date, "time entries removed");
        Ok(())
    }
}
