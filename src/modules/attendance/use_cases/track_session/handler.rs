// Keeps the per-user state in step with the identity provider.
//
// Subscribes once when started and holds the subscription inside a
// background task until `stop` is called.

use crate::modules::attendance::core::reconciler::AttendanceReconciler;
use crate::modules::time_entries::core::ledger::TimeLedger;
use crate::shared::core::primitives::UserContext;
use crate::shared::infrastructure::identity::{AuthEvent, IdentityProvider};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub struct AttendanceSession {
    task: JoinHandle<()>,
}

impl AttendanceSession {
    /// Loads state for whoever is signed in right now, then follows
    /// sign-in/sign-out transitions.
    pub async fn start(
        identity: Arc<dyn IdentityProvider>,
        reconciler: Arc<Mutex<AttendanceReconciler>>,
        ledger: Arc<Mutex<TimeLedger>>,
    ) -> Self {
        // Subscribe before reading the current user so no transition is lost.
        let mut subscription = identity.subscribe();
        if let Some(user) = identity.current_user().await {
            signed_in(&reconciler, &ledger, &user).await;
        }

        let task = tokio::spawn(async move {
            while let Some(event) = subscription.next().await {
                match event {
                    AuthEvent::SignedIn(user) => signed_in(&reconciler, &ledger, &user).await,
                    AuthEvent::SignedOut => {
                        reconciler.lock().await.clear();
                        ledger.lock().await.reset();
                        tracing::info!("signed out, session state cleared");
                    }
                }
            }
        });
        Self { task }
    }

    /// Releases the subscription and waits for the listener to finish.
    pub async fn stop(self) {
        self.task.abort();
        let _ = self.task.await;
    }
}

async fn signed_in(
    reconciler: &Mutex<AttendanceReconciler>,
    ledger: &Mutex<TimeLedger>,
    user: &UserContext,
) {
    tracing::info!(user_id = %user.user_id, "signed in");
    if let Err(error) = reconciler.lock().await.load(user).await {
        tracing::error!(%error, "error fetching attendance records");
    }

    let mut ledger = ledger.lock().await;
    if ledger.day().is_some_and(|day| day.user_id != user.user_id) {
        ledger.reset();
    }
    if ledger.projects().is_empty() {
        if let Err(error) = ledger.load_projects().await {
            tracing::error!(%error, "error fetching projects");
        }
    }
}
