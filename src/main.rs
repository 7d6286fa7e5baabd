use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use attendance_tracker::config::{AppConfig, StoreConfig};
use attendance_tracker::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use attendance_tracker::modules::attendance::adapters::outbound::attendance_store_in_memory::InMemoryAttendanceStore;
use attendance_tracker::modules::attendance::adapters::outbound::attendance_store_postgrest::PostgrestAttendanceStore;
use attendance_tracker::modules::attendance::use_cases::track_session::handler::AttendanceSession;
use attendance_tracker::modules::time_entries::adapters::outbound::time_entry_store::{
    ProjectStore, TimeEntryStore,
};
use attendance_tracker::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use attendance_tracker::modules::time_entries::adapters::outbound::time_entry_store_postgrest::PostgrestTimeEntryStore;
use attendance_tracker::shared::infrastructure::identity::in_memory::InMemoryIdentity;
use attendance_tracker::shared::infrastructure::record_store::postgrest::PostgrestClient;
use attendance_tracker::shell::{http::router, state::AppState};

type Stores = (
    Arc<dyn AttendanceStore>,
    Arc<dyn TimeEntryStore>,
    Arc<dyn ProjectStore>,
);

fn build_stores(store: Option<&StoreConfig>) -> anyhow::Result<Stores> {
    let Some(store) = store else {
        tracing::warn!("STORE_URL not set, records are kept in memory");
        let entries = Arc::new(InMemoryTimeEntryStore::new());
        return Ok((Arc::new(InMemoryAttendanceStore::new()), entries.clone(), entries));
    };

    let client = Arc::new(PostgrestClient::new(
        &store.url,
        &store.anon_key,
        store.access_token.as_deref(),
        store.timeout,
    )?);
    let entries = Arc::new(PostgrestTimeEntryStore::new(client.clone()));
    tracing::info!(url = %store.url, "using hosted record store");
    Ok((Arc::new(PostgrestAttendanceStore::new(client)), entries.clone(), entries))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let (attendance, entries, projects) = build_stores(config.store.as_ref())?;

    let identity = Arc::new(InMemoryIdentity::new());
    let state = AppState::new(identity.clone(), attendance, entries, projects);
    let session =
        AttendanceSession::start(identity, state.reconciler.clone(), state.ledger.clone()).await;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on http://{}", config.bind_addr);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    session.stop().await;
    Ok(())
}
