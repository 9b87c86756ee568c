// Effective event status

use chrono::{DateTime, Utc};

use crate::entities::Event;
use crate::value_objects::EventStatus;

/// Status shown to users. Drafts stay drafts; any other event whose end has
/// passed reads as closed; everything else shows its stored status.
pub fn resolve_event_status(event: &Event, now: DateTime<Utc>) -> EventStatus {
    if event.status == EventStatus::Draft {
        return EventStatus::Draft;
    }
    match event.end_at {
        Some(end_at) if end_at < now => EventStatus::Closed,
        _ => event.status,
    }
}

pub fn registration_open(event: &Event, now: DateTime<Utc>) -> bool {
    resolve_event_status(event, now) == EventStatus::Published
}
