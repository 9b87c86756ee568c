use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::forms::RegistrationForm;
use crate::queries::event_queries;
use crate::screens::{RegistrationScreen, SubmitGuard};
use crate::{AppError, AppState};
use portal_domain::{registration_open, resolve_event_status, Event, EventId, Registration};

#[derive(Debug)]
pub enum RegistrationEntry {
    Ready(RegistrationScreen),
    NeedsLogin { event_id: EventId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Created,
    Updated,
}

impl SubmitKind {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitKind::Created => "Registration submitted",
            SubmitKind::Updated => "Registration updated",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub kind: SubmitKind,
    pub registration: Registration,
    /// Fresh copy of the member's registrations; `None` when the refetch
    /// after the write failed and local data is stale.
    pub registrations: Option<Vec<Registration>>,
}

pub async fn open_registration(
    state: &AppState,
    event: Event,
    now: DateTime<Utc>,
) -> Result<RegistrationEntry, AppError> {
    if !registration_open(&event, now) {
        return Err(AppError::BadRequest(format!(
            "registration is not open for '{}' (status {})",
            event.title,
            resolve_event_status(&event, now)
        )));
    }

    let token = state.session.read().await.token().map(ToString::to_string);
    let Some(token) = token else {
        return defer_until_login(state, event.id).await;
    };

    let existing = match state.registrations.list_mine(&token).await {
        Ok(rows) => rows.into_iter().find(|row| row.event_id == event.id),
        Err(err) => {
            let err = state.surface(err).await;
            if err.is_unauthenticated() {
                return defer_until_login(state, event.id).await;
            }
            return Err(err);
        }
    };
    info!(
        event_id = %event.id,
        existing = existing.is_some(),
        "registration screen opened"
    );
    Ok(RegistrationEntry::Ready(RegistrationScreen::new(event, existing)))
}

pub async fn resume_pending_registration(
    state: &AppState,
    event_id: EventId,
    now: DateTime<Utc>,
) -> Result<RegistrationEntry, AppError> {
    let event = event_queries::find_event(state, event_id).await?;
    open_registration(state, event, now).await
}

pub async fn submit_registration(
    state: &AppState,
    screen: &mut RegistrationScreen,
) -> Result<SubmitOutcome, AppError> {
    let result = {
        let Some(_guard) = SubmitGuard::engage(&mut screen.submitting) else {
            return Err(AppError::BadRequest(
                "a submission is already in progress".to_string(),
            ));
        };
        screen.message = None;
        write_registration(state, &screen.event, screen.existing.as_ref(), &screen.form).await
    };

    match result {
        Ok(outcome) => {
            screen.sync_with(outcome.registration.clone());
            screen.message = Some(outcome.kind.message().to_string());
            Ok(outcome)
        }
        Err(err) => {
            if err.is_unauthenticated() {
                state.session.write().await.capture_intent(screen.event.id);
                if let Err(persist_err) = state.persist_session().await {
                    warn!("failed to keep registration intent: {}", persist_err);
                }
            }
            screen.message = Some(err.user_message());
            Err(err)
        }
    }
}

async fn defer_until_login(
    state: &AppState,
    event_id: EventId,
) -> Result<RegistrationEntry, AppError> {
    state.session.write().await.capture_intent(event_id);
    state.persist_session().await?;
    info!(event_id = %event_id, "registration deferred until sign-in");
    Ok(RegistrationEntry::NeedsLogin { event_id })
}

async fn write_registration(
    state: &AppState,
    event: &Event,
    existing: Option<&Registration>,
    form: &RegistrationForm,
) -> Result<SubmitOutcome, AppError> {
    let token = state.bearer_token().await?;
    form.validate()?;

    let (kind, written) = match existing.map(|record| record.id) {
        Some(id) => (
            SubmitKind::Updated,
            state.registrations.update(&token, id, &form.to_update()).await,
        ),
        None => (
            SubmitKind::Created,
            state
                .registrations
                .create(&token, &form.to_create(event.id))
                .await,
        ),
    };
    let written = match written {
        Ok(record) => record,
        Err(err) => return Err(state.surface(err).await),
    };
    info!(
        event_id = %event.id,
        registration_id = %written.id,
        ticket_count = written.ticket_count,
        kind = ?kind,
        "registration written"
    );

    let registrations = match state.registrations.list_mine(&token).await {
        Ok(rows) => Some(rows),
        Err(err) => {
            warn!("registration saved but refresh failed: {}", err);
            None
        }
    };
    let registration = registrations
        .as_ref()
        .and_then(|rows| rows.iter().find(|row| row.event_id == event.id).cloned())
        .unwrap_or(written);

    Ok(SubmitOutcome {
        kind,
        registration,
        registrations,
    })
}
