// Plain-text rendering for terminal output
use std::fmt::Write;

use chrono::{DateTime, Local, TimeZone, Utc};

use portal_application::queries::event_queries::EventCard;
use portal_application::screens::RegistrationScreen;
use portal_domain::{AdminRegistration, CurrentUser, EventStatus, ProxyEntry, Registration};

/// `MM/DD HH:MM`, plus ` - HH:MM` when the event has an end, in local time.
pub fn format_date_range(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> String {
    format_date_range_in(&Local, start, end)
}

pub fn format_date_range_in<Tz>(tz: &Tz, start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let start_label = start.with_timezone(tz).format("%m/%d %H:%M").to_string();
    match end {
        Some(end) => format!("{} - {}", start_label, end.with_timezone(tz).format("%H:%M")),
        None => start_label,
    }
}

fn availability(card: &EventCard) -> &'static str {
    if card.can_register {
        return "open for registration";
    }
    match card.effective_status {
        EventStatus::Closed => "ended",
        _ => "not yet open",
    }
}

pub fn render_event_cards(cards: &[EventCard]) -> String {
    if cards.is_empty() {
        return "No events found.\n".to_string();
    }
    let mut out = String::new();
    for card in cards {
        let event = &card.event;
        let marker = if card.registered { "[registered] " } else { "" };
        let _ = writeln!(out, "{}{}", marker, event.title);
        let _ = writeln!(out, "  id:        {}", event.id);
        let _ = writeln!(out, "  when:      {}", format_date_range(event.start_at, event.end_at));
        if let Some(description) = event.description.as_deref().filter(|text| !text.is_empty()) {
            let _ = writeln!(out, "  about:     {}", description);
        }
        let capacity = event
            .capacity
            .map(|value| value.to_string())
            .unwrap_or_else(|| "unlimited".to_string());
        let _ = writeln!(out, "  capacity:  {}", capacity);
        let _ = writeln!(out, "  status:    {} ({})", card.effective_status, availability(card));
        let _ = writeln!(out, "  my people: {}", card.headcount);
    }
    out
}

fn proxy_line(entry: &ProxyEntry) -> String {
    let mut parts = vec![entry.name.trim().to_string()];
    if let Some(relation) = entry.relation.as_deref() {
        parts.push(relation.to_string());
    }
    if let Some(phone) = entry.phone.as_deref() {
        parts.push(phone.to_string());
    }
    if let Some(note) = entry.note.as_deref() {
        parts.push(format!("\"{}\"", note));
    }
    parts.join(", ")
}

pub fn render_registration(record: &Registration) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "registration {}", record.id);
    let _ = writeln!(out, "  event:   {}", record.event_id);
    let _ = writeln!(out, "  status:  {}", record.status);
    let _ = writeln!(out, "  tickets: {}", record.ticket_count);
    if record.is_proxy {
        for entry in &record.proxy_entries {
            let _ = writeln!(out, "  proxy:   {}", proxy_line(entry));
        }
    }
    out
}

pub fn render_registrations(records: &[Registration]) -> String {
    if records.is_empty() {
        return "You have no registrations.\n".to_string();
    }
    records.iter().map(render_registration).collect()
}

pub fn render_screen(screen: &RegistrationScreen) -> String {
    let mut out = String::new();
    let action = if screen.is_update() { "update" } else { "new" };
    let _ = writeln!(out, "{} ({} registration)", screen.event.title, action);
    let _ = writeln!(
        out,
        "  when:    {}",
        format_date_range(screen.event.start_at, screen.event.end_at)
    );
    let _ = writeln!(out, "  tickets: {}", screen.form.ticket_count());
    if screen.form.is_proxy() {
        for entry in screen.form.proxy_entries() {
            let _ = writeln!(out, "  proxy:   {}", proxy_line(entry));
        }
    }
    out
}

pub fn render_admin_rows(rows: &[AdminRegistration], offset: u32) -> String {
    if rows.is_empty() {
        return "No registrations match.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<36}  {:<24}  {:<10}  {:>7}  {}",
        "id", "registrant", "status", "tickets", "proxies"
    );
    for row in rows {
        let record = &row.registration;
        let proxies = if record.is_proxy {
            record
                .proxy_entries
                .iter()
                .map(|entry| entry.name.trim())
                .collect::<Vec<_>>()
                .join("; ")
        } else {
            "-".to_string()
        };
        let _ = writeln!(
            out,
            "{:<36}  {:<24}  {:<10}  {:>7}  {}",
            record.id.to_string(),
            row.registrant_label(),
            record.status.to_string(),
            record.ticket_count,
            proxies
        );
    }
    let _ = writeln!(
        out,
        "showing {}-{}",
        offset + 1,
        offset + rows.len() as u32
    );
    out
}

pub fn render_user(user: &CurrentUser) -> String {
    format!("Signed in as {} ({})\n", user.display_label(), user.role.as_str())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset};
    use portal_domain::{Event, EventId, RegistrationId, RegistrationStatus};

    use super::*;

    fn event(capacity: Option<u32>) -> Event {
        let start = Utc.with_ymd_and_hms(2026, 3, 7, 10, 30, 0).single().expect("valid date");
        Event {
            id: EventId::new(),
            title: "Family Workshop".to_string(),
            description: None,
            poster_url: None,
            start_at: start,
            end_at: Some(start + Duration::minutes(90)),
            capacity,
            waitlist_enabled: false,
            status: EventStatus::Published,
            site_id: None,
        }
    }

    #[test]
    fn date_range_uses_month_day_and_end_time() {
        let taipei = FixedOffset::east_opt(8 * 3600).expect("offset");
        let start = Utc.with_ymd_and_hms(2026, 3, 7, 10, 30, 0).single().expect("valid date");
        assert_eq!(
            format_date_range_in(&taipei, start, Some(start + Duration::minutes(90))),
            "03/07 18:30 - 20:00"
        );
        assert_eq!(format_date_range_in(&Utc, start, None), "03/07 10:30");
    }

    #[test]
    fn null_capacity_reads_unlimited() {
        let cards = vec![EventCard {
            event: event(None),
            effective_status: EventStatus::Published,
            headcount: 3,
            registered: true,
            can_register: true,
        }];
        let text = render_event_cards(&cards);
        assert!(text.starts_with("[registered] Family Workshop"));
        assert!(text.contains("capacity:  unlimited"));
        assert!(text.contains("my people: 3"));
        assert!(text.contains("open for registration"));
    }

    #[test]
    fn closed_card_says_ended() {
        let cards = vec![EventCard {
            event: event(Some(40)),
            effective_status: EventStatus::Closed,
            headcount: 0,
            registered: false,
            can_register: false,
        }];
        let text = render_event_cards(&cards);
        assert!(text.contains("capacity:  40"));
        assert!(text.contains("Closed (ended)"));
    }

    #[test]
    fn proxy_entries_are_listed_only_when_proxying() {
        let mut record = Registration {
            id: RegistrationId::new(),
            event_id: EventId::new(),
            user_id: None,
            status: RegistrationStatus::Confirmed,
            ticket_count: 2,
            is_proxy: true,
            proxy_entries: vec![ProxyEntry {
                name: "Ruth".to_string(),
                phone: None,
                relation: Some("family".to_string()),
                note: None,
            }],
            created_at: Utc::now(),
            updated_at: None,
        };
        assert!(render_registration(&record).contains("proxy:   Ruth, family"));
        record.is_proxy = false;
        assert!(!render_registration(&record).contains("proxy:"));
    }
}
