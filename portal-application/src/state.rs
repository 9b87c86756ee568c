use std::sync::Arc;

use anyhow::anyhow;
use portal_domain::ports::{
    AuthGateway, EventGateway, ExportStore, RegistrationGateway, SessionStore,
};
use portal_domain::{CurrentUser, GatewayError, RuntimeConfig};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::{AppError, Session};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub registrations: Arc<dyn RegistrationGateway>,
    pub events: Arc<dyn EventGateway>,
    pub auth: Arc<dyn AuthGateway>,
    pub session_store: Arc<dyn SessionStore>,
    pub export_store: Arc<dyn ExportStore>,
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    pub async fn restore_session(&self) {
        let snapshot = match self.session_store.load().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("session store unreadable, starting signed out: {}", err);
                Default::default()
            }
        };
        let session = Session::from_snapshot(snapshot);
        info!(
            token_set = session.is_authenticated(),
            pending_intent = session.pending_intent().is_some(),
            "session restored"
        );
        *self.session.write().await = session;
    }

    pub async fn persist_session(&self) -> Result<(), AppError> {
        let snapshot = self.session.read().await.snapshot();
        self.session_store
            .save(&snapshot)
            .await
            .map_err(|err| AppError::Internal(anyhow!("failed to save session: {err}")))
    }

    pub async fn bearer_token(&self) -> Result<String, AppError> {
        self.session.read().await.bearer()
    }

    pub async fn current_user(&self) -> Result<CurrentUser, AppError> {
        let token = {
            let session = self.session.read().await;
            if let Some(user) = session.current_user() {
                return Ok(user.clone());
            }
            session.bearer()?
        };
        let user = match self.auth.current_user(&token).await {
            Ok(user) => user,
            Err(err) => return Err(self.surface(err).await),
        };
        self.session.write().await.set_current_user(user.clone());
        Ok(user)
    }

    pub async fn staff_token(&self) -> Result<String, AppError> {
        let token = self.bearer_token().await?;
        let user = self.current_user().await?;
        if !user.is_staff() {
            return Err(AppError::Forbidden(
                "staff access required for registration admin".to_string(),
            ));
        }
        Ok(token)
    }

    /// Converts a gateway failure into an application error. An expired or
    /// missing login also clears the stored token so the next action goes
    /// through sign-in again.
    pub(crate) async fn surface(&self, err: GatewayError) -> AppError {
        if err.is_unauthenticated() {
            self.session.write().await.expire();
            if let Err(persist_err) = self.persist_session().await {
                warn!("failed to clear expired session: {}", persist_err);
            }
            warn!("backend rejected credentials, session expired");
        }
        AppError::from(err)
    }
}
