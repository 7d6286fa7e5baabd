use crate::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::UserContext;
use chrono::{Datelike, Days, Months, NaiveDate};
use std::sync::Arc;

/// First and last day of the calendar month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date - Days::new(u64::from(date.day0()));
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// Sums a user's hours over a calendar month. Holds no state; every call
/// reads the store again.
#[derive(Clone)]
pub struct MonthlyAggregator {
    store: Arc<dyn TimeEntryStore>,
}

impl MonthlyAggregator {
    pub fn new(store: Arc<dyn TimeEntryStore>) -> Self {
        Self { store }
    }

    pub async fn monthly_total(
        &self,
        user: &UserContext,
        date: NaiveDate,
    ) -> Result<f64, ApplicationError> {
        let (start, end) = month_bounds(date);
        let hours = self
            .store
            .list_hours_between(&user.user_id, start, end)
            .await?;
        Ok(hours.into_iter().sum())
    }
}
