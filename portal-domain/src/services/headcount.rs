// Ticket-count derivation and headcount aggregation

use std::collections::HashMap;

use crate::entities::Registration;
use crate::value_objects::EventId;

/// Seats a self-service registration occupies: the registrant plus one per
/// proxy entry when proxying, otherwise the registrant alone.
pub fn derived_ticket_count(is_proxy: bool, proxy_entry_count: usize) -> u32 {
    if is_proxy {
        u32::try_from(proxy_entry_count)
            .unwrap_or(u32::MAX - 1)
            .saturating_add(1)
    } else {
        1
    }
}

/// Headcount contributed by one registration. A stored ticket count of zero
/// counts as one.
pub fn registration_headcount(registration: &Registration) -> u32 {
    if registration.is_proxy {
        derived_ticket_count(true, registration.proxy_entries.len())
    } else {
        registration.ticket_count.max(1)
    }
}

pub fn headcount_by_event<'a, I>(registrations: I) -> HashMap<EventId, u32>
where
    I: IntoIterator<Item = &'a Registration>,
{
    let mut counts = HashMap::new();
    for registration in registrations {
        *counts.entry(registration.event_id).or_insert(0) += registration_headcount(registration);
    }
    counts
}
