use std::path::PathBuf;

use anyhow::anyhow;
use tracing::{info, warn};

use crate::screens::{AdminEdit, AdminPanel};
use crate::{AppError, AppState};
use portal_domain::RegistrationId;

pub trait Confirmation: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

pub async fn open_admin_edit<'a>(
    state: &AppState,
    panel: &'a mut AdminPanel,
    id: RegistrationId,
) -> Result<&'a mut AdminEdit, AppError> {
    load_panel_row(state, panel, id).await?;
    panel.message = None;
    panel.begin_edit(id)
}

pub async fn save_admin_edit(state: &AppState, panel: &mut AdminPanel) -> Result<(), AppError> {
    let Some(edit) = panel.editing.as_ref() else {
        return Err(AppError::BadRequest("no registration is being edited".to_string()));
    };
    let result = write_admin_edit(state, edit).await;
    match result {
        Ok(row) => {
            info!(
                registration_id = %row.id(),
                ticket_count = row.registration.ticket_count,
                status = %row.registration.status,
                "registration updated by staff"
            );
            panel.upsert_row(row);
            panel.editing = None;
            panel.message = Some("Registration updated".to_string());
            Ok(())
        }
        Err(err) => {
            panel.message = Some(err.user_message());
            Err(err)
        }
    }
}

pub async fn delete_admin_registration(
    state: &AppState,
    panel: &mut AdminPanel,
    id: RegistrationId,
    confirmation: &dyn Confirmation,
) -> Result<DeleteOutcome, AppError> {
    load_panel_row(state, panel, id).await?;
    let label = panel
        .row(id)
        .map(|row| row.registrant_label())
        .unwrap_or_else(|| id.to_string());
    if !confirmation.confirm(&format!("Delete the registration of {}?", label)) {
        return Ok(DeleteOutcome::Declined);
    }

    let token = state.staff_token().await?;
    if let Err(err) = state.registrations.admin_delete(&token, id).await {
        let err = state.surface(err).await;
        panel.message = Some(err.user_message());
        return Err(err);
    }
    panel.remove_row(id);
    panel.message = Some("Registration deleted".to_string());
    info!(registration_id = %id, "registration deleted by staff");
    Ok(DeleteOutcome::Deleted)
}

pub async fn export_registrations(
    state: &AppState,
    panel: &AdminPanel,
) -> Result<PathBuf, AppError> {
    let token = state.staff_token().await?;
    let query = panel.filters.to_export_query(panel.event_id);
    let body = match state.registrations.admin_export(&token, &query).await {
        Ok(body) => body,
        Err(err) => return Err(state.surface(err).await),
    };
    if body.is_empty() {
        warn!(event_id = %panel.event_id, "export returned an empty file");
    }
    let file_name = format!("registrations_{}.csv", panel.event_id);
    let path = state
        .export_store
        .write_export(&file_name, &body)
        .await
        .map_err(|err| AppError::Internal(anyhow!("failed to write {file_name}: {err}")))?;
    info!(path = %path.display(), bytes = body.len(), "registrations exported");
    Ok(path)
}

// Rows not on the current page are fetched individually and must belong to
// the panel's event.
async fn load_panel_row(
    state: &AppState,
    panel: &mut AdminPanel,
    id: RegistrationId,
) -> Result<(), AppError> {
    if panel.row(id).is_some() {
        return Ok(());
    }
    let token = state.staff_token().await?;
    let row = match state.registrations.admin_get(&token, id).await {
        Ok(row) => row,
        Err(err) => return Err(state.surface(err).await),
    };
    if row.registration.event_id != panel.event_id {
        return Err(AppError::BadRequest(format!(
            "registration {} belongs to another event",
            id
        )));
    }
    panel.upsert_row(row);
    Ok(())
}

async fn write_admin_edit(
    state: &AppState,
    edit: &AdminEdit,
) -> Result<portal_domain::AdminRegistration, AppError> {
    edit.form.validate()?;
    let token = state.staff_token().await?;
    match state
        .registrations
        .admin_update(&token, edit.registration_id, &edit.form.to_update())
        .await
    {
        Ok(row) => Ok(row),
        Err(err) => Err(state.surface(err).await),
    }
}
