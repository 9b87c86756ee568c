use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use portal_application::{AppState, Session};
use portal_infrastructure::{
    ApiClient, AppConfig, ExportDirStore, HttpAuthGateway, HttpEventGateway,
    HttpRegistrationGateway, SessionFileStore,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let api = ApiClient::new(&runtime_config)?;

        let state = AppState {
            config: runtime_config,
            registrations: Arc::new(HttpRegistrationGateway::new(api.clone())),
            events: Arc::new(HttpEventGateway::new(api.clone())),
            auth: Arc::new(HttpAuthGateway::new(api)),
            session_store: Arc::new(SessionFileStore::new(&config.session_path)),
            export_store: Arc::new(ExportDirStore::new(&config.export_dir)),
            session: Arc::new(RwLock::new(Session::default())),
        };
        state.restore_session().await;

        Ok(Self { state })
    }
}

#[cfg(test)]
mod tests {
    use portal_domain::ports::SessionStore;
    use portal_domain::{EventId, SessionSnapshot};
    use portal_infrastructure::SessionFileStore;

    use super::*;

    #[tokio::test]
    async fn stored_session_is_restored() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = AppConfig {
            session_path: dir.path().join("session.toml").to_string_lossy().to_string(),
            export_dir: dir.path().join("exports").to_string_lossy().to_string(),
            ..AppConfig::default()
        };
        let event_id = EventId::new();
        SessionFileStore::new(&config.session_path)
            .save(&SessionSnapshot {
                token: Some("tok-1".to_string()),
                pending_event_id: Some(event_id),
            })
            .await
            .expect("seed session");

        let context = AppContext::new(&config).await.expect("context");
        let session = context.state.session.read().await;
        assert_eq!(session.token(), Some("tok-1"));
        assert_eq!(session.pending_intent(), Some(event_id));
    }
}
