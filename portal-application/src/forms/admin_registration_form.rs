use portal_domain::{AdminRegistration, AdminRegistrationUpdate, ProxyEntry, RegistrationStatus};

use super::{entries_for_editing, entries_for_payload, validate_proxy_entries};
use crate::AppError;

/// Staff edit form. The ticket count entered here is authoritative: no
/// proxy edit touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminRegistrationForm {
    pub ticket_count: u32,
    pub is_proxy: bool,
    pub status: RegistrationStatus,
    pub proxy_entries: Vec<ProxyEntry>,
}

impl Default for AdminRegistrationForm {
    fn default() -> Self {
        Self {
            ticket_count: 1,
            is_proxy: false,
            status: RegistrationStatus::Pending,
            proxy_entries: vec![ProxyEntry::default()],
        }
    }
}

impl AdminRegistrationForm {
    pub fn from_row(row: &AdminRegistration) -> Self {
        let record = &row.registration;
        Self {
            ticket_count: record.ticket_count.max(1),
            is_proxy: record.is_proxy,
            status: record.status,
            proxy_entries: entries_for_editing(&record.proxy_entries),
        }
    }

    pub fn set_ticket_count(&mut self, ticket_count: u32) -> Result<(), AppError> {
        if ticket_count == 0 {
            return Err(AppError::BadRequest(
                "ticket_count must be at least 1".to_string(),
            ));
        }
        self.ticket_count = ticket_count;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.ticket_count == 0 {
            return Err(AppError::BadRequest(
                "ticket_count must be at least 1".to_string(),
            ));
        }
        if self.is_proxy {
            validate_proxy_entries(&self.proxy_entries)?;
        }
        Ok(())
    }

    pub fn to_update(&self) -> AdminRegistrationUpdate {
        AdminRegistrationUpdate {
            ticket_count: self.ticket_count,
            is_proxy: self.is_proxy,
            status: self.status,
            proxy_entries: entries_for_payload(self.is_proxy, &self.proxy_entries),
        }
    }
}
