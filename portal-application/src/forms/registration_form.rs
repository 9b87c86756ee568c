use portal_domain::{
    derived_ticket_count, EventId, ProxyEntry, Registration, RegistrationCreate,
    RegistrationUpdate,
};

use super::{entries_for_editing, entries_for_payload, validate_proxy_entries};
use crate::AppError;

/// Member-facing registration form. The ticket count is always derived from
/// the proxy flag and list; a stored non-proxy count is kept until the first
/// proxy edit.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    ticket_count: u32,
    is_proxy: bool,
    proxy_entries: Vec<ProxyEntry>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            ticket_count: 1,
            is_proxy: false,
            proxy_entries: vec![ProxyEntry::default()],
        }
    }
}

impl RegistrationForm {
    pub fn from_registration(record: &Registration) -> Self {
        let ticket_count = if record.is_proxy {
            derived_ticket_count(true, record.proxy_entries.len())
        } else {
            record.ticket_count.max(1)
        };
        Self {
            ticket_count,
            is_proxy: record.is_proxy,
            proxy_entries: entries_for_editing(&record.proxy_entries),
        }
    }

    pub fn ticket_count(&self) -> u32 {
        self.ticket_count
    }

    pub fn is_proxy(&self) -> bool {
        self.is_proxy
    }

    pub fn proxy_entries(&self) -> &[ProxyEntry] {
        &self.proxy_entries
    }

    pub fn set_proxy(&mut self, is_proxy: bool) {
        self.is_proxy = is_proxy;
        self.recompute();
    }

    pub fn add_proxy_entry(&mut self, entry: ProxyEntry) {
        self.proxy_entries.push(entry);
        self.recompute();
    }

    pub fn remove_proxy_entry(&mut self, index: usize) -> Option<ProxyEntry> {
        if index >= self.proxy_entries.len() {
            return None;
        }
        let removed = self.proxy_entries.remove(index);
        self.recompute();
        Some(removed)
    }

    pub fn replace_proxy_entries(&mut self, entries: Vec<ProxyEntry>) {
        self.proxy_entries = entries;
        self.recompute();
    }

    pub fn update_proxy_entry(&mut self, index: usize, entry: ProxyEntry) -> Result<(), AppError> {
        let slot = self.proxy_entries.get_mut(index).ok_or_else(|| {
            AppError::BadRequest(format!("no proxy entry at position {}", index + 1))
        })?;
        *slot = entry;
        self.recompute();
        Ok(())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.is_proxy {
            validate_proxy_entries(&self.proxy_entries)?;
        }
        Ok(())
    }

    pub fn to_create(&self, event_id: EventId) -> RegistrationCreate {
        RegistrationCreate {
            event_id,
            ticket_count: self.ticket_count,
            is_proxy: self.is_proxy,
            proxy_entries: entries_for_payload(self.is_proxy, &self.proxy_entries),
        }
    }

    pub fn to_update(&self) -> RegistrationUpdate {
        RegistrationUpdate {
            ticket_count: self.ticket_count,
            is_proxy: self.is_proxy,
            proxy_entries: entries_for_payload(self.is_proxy, &self.proxy_entries),
        }
    }

    fn recompute(&mut self) {
        self.ticket_count = derived_ticket_count(self.is_proxy, self.proxy_entries.len());
    }
}
