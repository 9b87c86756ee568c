use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::registration_queries::my_headcounts;
use crate::filters::EventFilters;
use crate::{AppError, AppState};
use portal_domain::{
    registration_open, resolve_event_status, Event, EventId, EventQuery, EventStatus,
};

#[derive(Debug, Clone, Serialize)]
pub struct EventCard {
    pub event: Event,
    pub effective_status: EventStatus,
    /// Seats taken by the signed-in member, proxies included.
    pub headcount: u32,
    pub registered: bool,
    pub can_register: bool,
}

pub async fn list_event_cards(
    state: &AppState,
    filters: &EventFilters,
    now: DateTime<Utc>,
) -> Result<Vec<EventCard>, AppError> {
    let events = state.events.list_events(filters.as_query()).await?;
    let headcounts = my_headcounts(state).await;
    debug!(
        events = events.len(),
        registered = headcounts.len(),
        "event listing loaded"
    );

    Ok(events
        .into_iter()
        .map(|event| {
            let headcount = headcounts.get(&event.id).copied().unwrap_or(0);
            EventCard {
                effective_status: resolve_event_status(&event, now),
                can_register: registration_open(&event, now),
                registered: headcount > 0,
                headcount,
                event,
            }
        })
        .collect())
}

pub async fn find_event(state: &AppState, id: EventId) -> Result<Event, AppError> {
    let mut query = EventQuery {
        limit: state.config.events_page_size.max(1),
        ..EventQuery::default()
    };
    loop {
        let page = state.events.list_events(&query).await?;
        let exhausted = (page.len() as u32) < query.limit;
        if let Some(event) = page.into_iter().find(|event| event.id == id) {
            return Ok(event);
        }
        if exhausted {
            return Err(AppError::Rejected(format!("Event {} not found", id)));
        }
        query.offset += query.limit;
    }
}
