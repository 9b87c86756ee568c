use std::collections::HashMap;

use tracing::warn;

use crate::{AppError, AppState};
use portal_domain::{headcount_by_event, EventId, Registration};

pub async fn list_my_registrations(state: &AppState) -> Result<Vec<Registration>, AppError> {
    let token = state.bearer_token().await?;
    match state.registrations.list_mine(&token).await {
        Ok(rows) => Ok(rows),
        Err(err) => Err(state.surface(err).await),
    }
}

/// Per-event headcount of the signed-in member. Signed-out visitors and
/// failed lookups yield an empty map so the listing still renders.
pub async fn my_headcounts(state: &AppState) -> HashMap<EventId, u32> {
    if !state.session.read().await.is_authenticated() {
        return HashMap::new();
    }
    match list_my_registrations(state).await {
        Ok(rows) => headcount_by_event(&rows),
        Err(err) => {
            warn!("could not load registrations for headcount: {}", err);
            HashMap::new()
        }
    }
}
