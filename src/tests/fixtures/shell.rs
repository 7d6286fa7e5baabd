use crate::modules::attendance::adapters::outbound::attendance_store_in_memory::InMemoryAttendanceStore;
use crate::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use crate::shared::core::primitives::UserContext;
use crate::shared::infrastructure::identity::in_memory::InMemoryIdentity;
use crate::shell::state::AppState;
use crate::tests::fixtures::time_entries::projects;
use axum::body::Body;
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;

pub struct TestApp {
    pub state: AppState,
    pub attendance: Arc<InMemoryAttendanceStore>,
    pub entries: Arc<InMemoryTimeEntryStore>,
}

pub fn app_with(attendance: InMemoryAttendanceStore, entries: InMemoryTimeEntryStore) -> TestApp {
    let attendance = Arc::new(attendance);
    let entries = Arc::new(entries);
    let state = AppState::new(
        Arc::new(InMemoryIdentity::new()),
        attendance.clone(),
        entries.clone(),
        entries.clone(),
    );
    TestApp {
        state,
        attendance,
        entries,
    }
}

pub fn signed_out_app() -> TestApp {
    app_with(
        InMemoryAttendanceStore::new(),
        InMemoryTimeEntryStore::with_projects(projects()),
    )
}

/// Signs in `user-fixed-0001` and loads what a session would on sign-in.
pub async fn sign_in(app: &TestApp) -> UserContext {
    let user = app.state.identity.sign_in("user-fixed-0001").await;
    app.state.reconciler.lock().await.load(&user).await.unwrap();
    app.state.ledger.lock().await.load_projects().await.unwrap();
    user
}

pub async fn signed_in_app() -> TestApp {
    let app = signed_out_app();
    sign_in(&app).await;
    app
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn json_body(value: serde_json::Value) -> Body {
    Body::from(value.to_string())
}
