use portal_domain::{AdminRegistrationQuery, EventId, RegistrationExportQuery, RegistrationStatus};

use super::normalize_query_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminFilters {
    query: Option<String>,
    status: Option<RegistrationStatus>,
    limit: u32,
    offset: u32,
}

impl AdminFilters {
    pub fn new(limit: u32) -> Self {
        Self {
            query: None,
            status: None,
            limit: limit.max(1),
            offset: 0,
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn status(&self) -> Option<RegistrationStatus> {
        self.status
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn set_query(&mut self, query: Option<String>) {
        self.query = normalize_query_text(query);
        self.offset = 0;
    }

    pub fn set_status(&mut self, status: Option<RegistrationStatus>) {
        self.status = status;
        self.offset = 0;
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
        self.offset = 0;
    }

    pub fn set_offset(&mut self, offset: u32) {
        self.offset = offset;
    }

    pub fn next_page(&mut self) {
        self.offset = self.offset.saturating_add(self.limit);
    }

    pub fn previous_page(&mut self) {
        self.offset = self.offset.saturating_sub(self.limit);
    }

    pub fn to_query(&self, event_id: EventId) -> AdminRegistrationQuery {
        AdminRegistrationQuery {
            event_id,
            limit: self.limit,
            offset: self.offset,
            q: self.query.clone(),
            status: self.status,
        }
    }

    /// Export covers the whole filtered set, not just the current page.
    pub fn to_export_query(&self, event_id: EventId) -> RegistrationExportQuery {
        RegistrationExportQuery {
            event_id,
            q: self.query.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_changes_reset_offset() {
        let mut filters = AdminFilters::new(20);
        filters.next_page();
        filters.next_page();
        assert_eq!(filters.offset(), 40);

        filters.set_query(Some("  grace ".to_string()));
        assert_eq!(filters.offset(), 0);
        assert_eq!(filters.query(), Some("grace"));

        filters.next_page();
        filters.set_status(Some(RegistrationStatus::Waitlisted));
        assert_eq!(filters.offset(), 0);
    }

    #[test]
    fn previous_page_stops_at_zero() {
        let mut filters = AdminFilters::new(20);
        filters.set_offset(10);
        filters.previous_page();
        assert_eq!(filters.offset(), 0);
    }

    #[test]
    fn blank_query_is_dropped_from_requests() {
        let mut filters = AdminFilters::new(0);
        filters.set_query(Some("   ".to_string()));
        let event_id = EventId::new();
        let query = filters.to_query(event_id);
        assert_eq!(query.q, None);
        assert_eq!(query.limit, 1);
        assert_eq!(filters.to_export_query(event_id).event_id, event_id);
    }
}
