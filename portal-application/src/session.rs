use portal_domain::{CurrentUser, EventId, SessionSnapshot};

use crate::AppError;

#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    current_user: Option<CurrentUser>,
    pending_intent: Option<EventId>,
}

impl Session {
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            token: snapshot
                .token
                .map(|token| token.trim().to_string())
                .filter(|token| !token.is_empty()),
            current_user: None,
            pending_intent: snapshot.pending_event_id,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.token.clone(),
            pending_event_id: self.pending_intent,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn bearer(&self) -> Result<String, AppError> {
        self.token.clone().ok_or(AppError::Unauthenticated)
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }

    pub fn set_current_user(&mut self, user: CurrentUser) {
        self.current_user = Some(user);
    }

    pub fn sign_in(&mut self, token: String) {
        self.token = Some(token);
        self.current_user = None;
    }

    /// Drops the credentials but keeps a captured intent, so a forced
    /// re-login can still resume it.
    pub fn expire(&mut self) {
        self.token = None;
        self.current_user = None;
    }

    pub fn sign_out(&mut self) {
        self.expire();
        self.pending_intent = None;
    }

    pub fn capture_intent(&mut self, event_id: EventId) {
        self.pending_intent = Some(event_id);
    }

    pub fn pending_intent(&self) -> Option<EventId> {
        self.pending_intent
    }

    pub fn take_intent(&mut self) -> Option<EventId> {
        self.pending_intent.take()
    }

    pub fn discard_intent(&mut self) {
        self.pending_intent = None;
    }
}
