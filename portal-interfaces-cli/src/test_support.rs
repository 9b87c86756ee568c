// Test doubles for driving handlers without a backend

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use portal_application::{AppState, Session};
use portal_domain::ports::{
    AuthGateway, EventGateway, ExportStore, GatewayResult, RegistrationGateway, SessionStore,
};
use portal_domain::{
    AdminRegistration, AdminRegistrationQuery, AdminRegistrationUpdate, CurrentUser, Event,
    EventId, EventQuery, GatewayError, LoginRequest, Registration, RegistrationCreate,
    RegistrationExportQuery, RegistrationId, RegistrationUpdate, RuntimeConfig, SessionSnapshot,
    TokenResponse,
};
use tokio::sync::RwLock;

pub(crate) struct RejectingBackend;

fn unavailable<T>() -> GatewayResult<T> {
    Err(GatewayError::Transport("backend not available in tests".to_string()))
}

#[async_trait]
impl AuthGateway for RejectingBackend {
    async fn login(&self, _request: &LoginRequest) -> GatewayResult<TokenResponse> {
        Err(GatewayError::Unauthenticated)
    }

    async fn current_user(&self, _token: &str) -> GatewayResult<CurrentUser> {
        Err(GatewayError::Unauthenticated)
    }
}

#[async_trait]
impl EventGateway for RejectingBackend {
    async fn list_events(&self, _query: &EventQuery) -> GatewayResult<Vec<Event>> {
        unavailable()
    }
}

#[async_trait]
impl RegistrationGateway for RejectingBackend {
    async fn list_mine(&self, _token: &str) -> GatewayResult<Vec<Registration>> {
        unavailable()
    }

    async fn create(
        &self,
        _token: &str,
        _payload: &RegistrationCreate,
    ) -> GatewayResult<Registration> {
        unavailable()
    }

    async fn update(
        &self,
        _token: &str,
        _id: RegistrationId,
        _payload: &RegistrationUpdate,
    ) -> GatewayResult<Registration> {
        unavailable()
    }

    async fn admin_list(
        &self,
        _token: &str,
        _query: &AdminRegistrationQuery,
    ) -> GatewayResult<Vec<AdminRegistration>> {
        unavailable()
    }

    async fn admin_get(&self, _token: &str, _id: RegistrationId) -> GatewayResult<AdminRegistration> {
        unavailable()
    }

    async fn admin_update(
        &self,
        _token: &str,
        _id: RegistrationId,
        _payload: &AdminRegistrationUpdate,
    ) -> GatewayResult<AdminRegistration> {
        unavailable()
    }

    async fn admin_delete(&self, _token: &str, _id: RegistrationId) -> GatewayResult<()> {
        unavailable()
    }

    async fn admin_export(
        &self,
        _token: &str,
        _query: &RegistrationExportQuery,
    ) -> GatewayResult<Vec<u8>> {
        unavailable()
    }
}

#[derive(Clone, Default)]
pub(crate) struct MemorySessionStore {
    snapshot: Arc<Mutex<SessionSnapshot>>,
}

impl MemorySessionStore {
    pub(crate) fn with_intent(event_id: EventId) -> Self {
        let store = Self::default();
        store.snapshot.lock().expect("snapshot lock").pending_event_id = Some(event_id);
        store
    }

    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.lock().expect("snapshot lock").clone()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> anyhow::Result<SessionSnapshot> {
        Ok(self.snapshot())
    }

    async fn save(&self, snapshot: &SessionSnapshot) -> anyhow::Result<()> {
        *self.snapshot.lock().expect("snapshot lock") = snapshot.clone();
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        *self.snapshot.lock().expect("snapshot lock") = SessionSnapshot::default();
        Ok(())
    }
}

struct NoExports;

#[async_trait]
impl ExportStore for NoExports {
    async fn write_export(&self, _file_name: &str, _body: &[u8]) -> anyhow::Result<PathBuf> {
        Err(anyhow!("exports are not written in tests"))
    }
}

pub(crate) async fn signed_out_state(store: MemorySessionStore) -> AppState {
    let backend = Arc::new(RejectingBackend);
    let state = AppState {
        config: RuntimeConfig::default(),
        registrations: backend.clone(),
        events: backend.clone(),
        auth: backend,
        session_store: Arc::new(store),
        export_store: Arc::new(NoExports),
        session: Arc::new(RwLock::new(Session::default())),
    };
    state.restore_session().await;
    state
}
