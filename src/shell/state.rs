use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::core::reconciler::AttendanceReconciler;
use crate::modules::time_entries::adapters::outbound::time_entry_store::{
    ProjectStore, TimeEntryStore,
};
use crate::modules::time_entries::core::ledger::TimeLedger;
use crate::modules::time_entries::use_cases::monthly_total::handler::MonthlyAggregator;
use crate::shared::core::notice::Notice;
use crate::shared::core::primitives::UserContext;
use crate::shared::infrastructure::identity::IdentityProvider;
use crate::shared::infrastructure::identity::in_memory::InMemoryIdentity;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Each component sits behind its own lock, so writes to one component are
/// handled one at a time.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<InMemoryIdentity>,
    pub reconciler: Arc<Mutex<AttendanceReconciler>>,
    pub ledger: Arc<Mutex<TimeLedger>>,
    pub monthly: MonthlyAggregator,
}

impl AppState {
    pub fn new(
        identity: Arc<InMemoryIdentity>,
        attendance_store: Arc<dyn AttendanceStore>,
        time_entry_store: Arc<dyn TimeEntryStore>,
        project_store: Arc<dyn ProjectStore>,
    ) -> Self {
        Self {
            identity,
            reconciler: Arc::new(Mutex::new(AttendanceReconciler::new(attendance_store))),
            ledger: Arc::new(Mutex::new(TimeLedger::new(
                time_entry_store.clone(),
                project_store,
            ))),
            monthly: MonthlyAggregator::new(time_entry_store),
        }
    }

    /// The signed-in user, or the notice telling the caller to sign in.
    pub async fn current_user(&self) -> Result<UserContext, Notice> {
        self.identity.current_user().await.ok_or_else(Notice::signed_out)
    }
}
