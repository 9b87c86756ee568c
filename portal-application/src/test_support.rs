use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use portal_domain::ports::{
    AuthGateway, EventGateway, ExportStore, GatewayResult, RegistrationGateway, SessionStore,
};
use portal_domain::{
    AdminRegistration, AdminRegistrationQuery, AdminRegistrationUpdate, CurrentUser, Event,
    EventId, EventQuery, EventStatus, GatewayError, LoginRequest, Registration,
    RegistrationCreate, RegistrationExportQuery, RegistrationId, RegistrationStatus,
    RegistrationUpdate, RuntimeConfig, SessionSnapshot, TokenResponse, UserId, UserRole,
};
use tokio::sync::RwLock;

use crate::{AppState, Session};

pub(crate) const VALID_TOKEN: &str = "token-valid";
pub(crate) const PASSWORD: &str = "correct horse";

pub(crate) struct FakeBackend {
    pub user: Mutex<CurrentUser>,
    pub events: Mutex<Vec<Event>>,
    pub registrations: Mutex<Vec<Registration>>,
    pub calls: Mutex<Vec<String>>,
    pub created: Mutex<Vec<RegistrationCreate>>,
    pub updated: Mutex<Vec<RegistrationUpdate>>,
    pub admin_updates: Mutex<Vec<AdminRegistrationUpdate>>,
    pub admin_queries: Mutex<Vec<AdminRegistrationQuery>>,
    pub failures: Mutex<HashMap<&'static str, GatewayError>>,
    pub export_body: Vec<u8>,
}

impl FakeBackend {
    pub fn new(role: UserRole) -> Arc<Self> {
        Arc::new(Self {
            user: Mutex::new(CurrentUser {
                id: UserId::new(),
                email: "grace@example.org".to_string(),
                full_name: Some("Grace Lin".to_string()),
                role,
                site_id: None,
            }),
            events: Mutex::new(Vec::new()),
            registrations: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
            admin_updates: Mutex::new(Vec::new()),
            admin_queries: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
            export_body: b"name,email,status\nGrace,grace@example.org,Pending\n".to_vec(),
        })
    }

    pub fn add_event(&self, event: Event) {
        self.events.lock().expect("events lock").push(event);
    }

    pub fn add_registration(&self, registration: Registration) {
        self.registrations
            .lock()
            .expect("registrations lock")
            .push(registration);
    }

    pub fn fail_next(&self, operation: &'static str, err: GatewayError) {
        self.failures
            .lock()
            .expect("failures lock")
            .insert(operation, err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls().iter().filter(|call| call.as_str() == operation).count()
    }

    fn enter(&self, operation: &'static str, token: Option<&str>) -> GatewayResult<()> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(operation.to_string());
        if let Some(err) = self.failures.lock().expect("failures lock").remove(operation) {
            return Err(err);
        }
        match token {
            Some(token) if token != VALID_TOKEN => Err(GatewayError::Unauthenticated),
            _ => Ok(()),
        }
    }

    fn admin_row(&self, registration: Registration) -> AdminRegistration {
        let user = self.user.lock().expect("user lock").clone();
        AdminRegistration {
            registration,
            event_title: Some("Family Workshop".to_string()),
            event_site_id: None,
            event_start_at: None,
            user_email: Some(user.email),
            user_full_name: user.full_name,
            user_phone: None,
            user_member_type: None,
            user_role: Some(user.role.as_str().to_string()),
        }
    }
}

#[async_trait]
impl RegistrationGateway for FakeBackend {
    async fn list_mine(&self, token: &str) -> GatewayResult<Vec<Registration>> {
        self.enter("list_mine", Some(token))?;
        Ok(self.registrations.lock().expect("registrations lock").clone())
    }

    async fn create(
        &self,
        token: &str,
        payload: &RegistrationCreate,
    ) -> GatewayResult<Registration> {
        self.enter("create", Some(token))?;
        let mut rows = self.registrations.lock().expect("registrations lock");
        if rows.iter().any(|row| row.event_id == payload.event_id) {
            return Err(GatewayError::Rejected {
                status: 400,
                message: "Registration already exists".to_string(),
            });
        }
        self.created
            .lock()
            .expect("created lock")
            .push(payload.clone());
        let record = Registration {
            id: RegistrationId::new(),
            event_id: payload.event_id,
            user_id: Some(self.user.lock().expect("user lock").id),
            status: RegistrationStatus::Pending,
            ticket_count: payload.ticket_count,
            is_proxy: payload.is_proxy,
            proxy_entries: payload.proxy_entries.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        token: &str,
        id: RegistrationId,
        payload: &RegistrationUpdate,
    ) -> GatewayResult<Registration> {
        self.enter("update", Some(token))?;
        self.updated
            .lock()
            .expect("updated lock")
            .push(payload.clone());
        let mut rows = self.registrations.lock().expect("registrations lock");
        let record = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| GatewayError::NotFound("Registration not found".to_string()))?;
        record.ticket_count = payload.ticket_count;
        record.is_proxy = payload.is_proxy;
        record.proxy_entries = payload.proxy_entries.clone();
        record.updated_at = Some(Utc::now());
        Ok(record.clone())
    }

    async fn admin_list(
        &self,
        token: &str,
        query: &AdminRegistrationQuery,
    ) -> GatewayResult<Vec<AdminRegistration>> {
        self.enter("admin_list", Some(token))?;
        self.admin_queries
            .lock()
            .expect("admin queries lock")
            .push(query.clone());
        let rows = self.registrations.lock().expect("registrations lock").clone();
        Ok(rows
            .into_iter()
            .filter(|row| row.event_id == query.event_id)
            .filter(|row| query.status.map_or(true, |status| row.status == status))
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .map(|row| self.admin_row(row))
            .collect())
    }

    async fn admin_get(&self, token: &str, id: RegistrationId) -> GatewayResult<AdminRegistration> {
        self.enter("admin_get", Some(token))?;
        let row = self
            .registrations
            .lock()
            .expect("registrations lock")
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound("Registration not found".to_string()))?;
        Ok(self.admin_row(row))
    }

    async fn admin_update(
        &self,
        token: &str,
        id: RegistrationId,
        payload: &AdminRegistrationUpdate,
    ) -> GatewayResult<AdminRegistration> {
        self.enter("admin_update", Some(token))?;
        self.admin_updates
            .lock()
            .expect("admin updates lock")
            .push(payload.clone());
        let updated = {
            let mut rows = self.registrations.lock().expect("registrations lock");
            let record = rows
                .iter_mut()
                .find(|row| row.id == id)
                .ok_or_else(|| GatewayError::NotFound("Registration not found".to_string()))?;
            record.ticket_count = payload.ticket_count;
            record.is_proxy = payload.is_proxy;
            record.status = payload.status;
            record.proxy_entries = payload.proxy_entries.clone();
            record.clone()
        };
        Ok(self.admin_row(updated))
    }

    async fn admin_delete(&self, token: &str, id: RegistrationId) -> GatewayResult<()> {
        self.enter("admin_delete", Some(token))?;
        self.registrations
            .lock()
            .expect("registrations lock")
            .retain(|row| row.id != id);
        Ok(())
    }

    async fn admin_export(
        &self,
        token: &str,
        _query: &RegistrationExportQuery,
    ) -> GatewayResult<Vec<u8>> {
        self.enter("admin_export", Some(token))?;
        Ok(self.export_body.clone())
    }
}

#[async_trait]
impl EventGateway for FakeBackend {
    async fn list_events(&self, query: &EventQuery) -> GatewayResult<Vec<Event>> {
        self.enter("list_events", None)?;
        Ok(self
            .events
            .lock()
            .expect("events lock")
            .iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AuthGateway for FakeBackend {
    async fn login(&self, request: &LoginRequest) -> GatewayResult<TokenResponse> {
        self.enter("login", None)?;
        if request.password != PASSWORD {
            return Err(GatewayError::Unauthenticated);
        }
        Ok(TokenResponse {
            access_token: VALID_TOKEN.to_string(),
            token_type: "bearer".to_string(),
        })
    }

    async fn current_user(&self, token: &str) -> GatewayResult<CurrentUser> {
        self.enter("current_user", Some(token))?;
        Ok(self.user.lock().expect("user lock").clone())
    }
}

#[derive(Default)]
pub(crate) struct MemorySessionStore {
    pub snapshot: Mutex<SessionSnapshot>,
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> anyhow::Result<SessionSnapshot> {
        Ok(self.snapshot.lock().expect("snapshot lock").clone())
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

#[derive(Default)]
pub(crate) struct MemoryExportStore {
    pub files: Mutex<Vec<(String, Vec<u8>)>>,
}

#[async_trait]
impl ExportStore for MemoryExportStore {
    async fn write_export(&self, file_name: &str, body: &[u8]) -> anyhow::Result<PathBuf> {
        self.files
            .lock()
            .expect("files lock")
            .push((file_name.to_string(), body.to_vec()));
        Ok(PathBuf::from("/exports").join(file_name))
    }
}

pub(crate) struct Harness {
    pub state: AppState,
    pub backend: Arc<FakeBackend>,
    pub sessions: Arc<MemorySessionStore>,
    pub exports: Arc<MemoryExportStore>,
}

impl Harness {
    pub fn new(role: UserRole) -> Self {
        let backend = FakeBackend::new(role);
        let sessions = Arc::new(MemorySessionStore::default());
        let exports = Arc::new(MemoryExportStore::default());
        let state = AppState {
            config: RuntimeConfig {
                events_page_size: 2,
                ..RuntimeConfig::default()
            },
            registrations: backend.clone(),
            events: backend.clone(),
            auth: backend.clone(),
            session_store: sessions.clone(),
            export_store: exports.clone(),
            session: Arc::new(RwLock::new(Session::default())),
        };
        Self {
            state,
            backend,
            sessions,
            exports,
        }
    }

    pub async fn signed_in(role: UserRole) -> Self {
        let harness = Self::new(role);
        harness
            .state
            .session
            .write()
            .await
            .sign_in(VALID_TOKEN.to_string());
        harness
    }
}

pub(crate) fn published_event(now: DateTime<Utc>) -> Event {
    Event {
        id: EventId::new(),
        title: "City Revival Gathering".to_string(),
        description: Some("Evening worship and prayer".to_string()),
        poster_url: None,
        start_at: now + Duration::days(3),
        end_at: Some(now + Duration::days(3) + Duration::hours(2)),
        capacity: Some(10),
        waitlist_enabled: true,
        status: EventStatus::Published,
        site_id: None,
    }
}

pub(crate) fn stored_registration(
    event_id: EventId,
    status: RegistrationStatus,
    proxy_names: &[&str],
) -> Registration {
    Registration {
        id: RegistrationId::new(),
        event_id,
        user_id: None,
        status,
        ticket_count: proxy_names.len() as u32 + 1,
        is_proxy: !proxy_names.is_empty(),
        proxy_entries: proxy_names
            .iter()
            .map(|name| portal_domain::ProxyEntry::named(*name))
            .collect(),
        created_at: Utc::now() - Duration::days(1),
        updated_at: None,
    }
}
