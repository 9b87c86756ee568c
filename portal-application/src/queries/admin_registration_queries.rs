use tracing::debug;

use crate::screens::AdminPanel;
use crate::{AppError, AppState};

pub async fn refresh_admin_list(state: &AppState, panel: &mut AdminPanel) -> Result<(), AppError> {
    let token = state.staff_token().await?;
    let query = panel.filters.to_query(panel.event_id);
    let rows = match state.registrations.admin_list(&token, &query).await {
        Ok(rows) => rows,
        Err(err) => {
            let err = state.surface(err).await;
            panel.message = Some(err.user_message());
            return Err(err);
        }
    };
    debug!(
        event_id = %panel.event_id,
        offset = query.offset,
        rows = rows.len(),
        "admin registrations loaded"
    );
    if let Some(edit) = panel.editing.as_ref() {
        if !rows.iter().any(|row| row.id() == edit.registration_id) {
            panel.editing = None;
        }
    }
    panel.rows = rows;
    Ok(())
}
