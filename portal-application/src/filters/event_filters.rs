use portal_domain::{EventQuery, EventStatus, SiteId, SortDirection};

use super::normalize_query_text;

#[derive(Debug, Clone, PartialEq)]
pub struct EventFilters {
    query: EventQuery,
}

impl EventFilters {
    pub fn new(limit: u32) -> Self {
        Self {
            query: EventQuery {
                limit: limit.max(1),
                ..EventQuery::default()
            },
        }
    }

    pub fn as_query(&self) -> &EventQuery {
        &self.query
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.query.q = normalize_query_text(text);
        self.query.offset = 0;
    }

    pub fn set_status(&mut self, status: Option<EventStatus>) {
        self.query.status = status;
        self.query.offset = 0;
    }

    pub fn set_site(&mut self, site_id: Option<SiteId>) {
        self.query.site_id = site_id;
        self.query.offset = 0;
    }

    pub fn set_upcoming_only(&mut self, upcoming_only: bool) {
        self.query.upcoming_only = upcoming_only;
        self.query.offset = 0;
    }

    pub fn set_sort(&mut self, sort_by: &str, sort_dir: SortDirection) {
        let sort_by = sort_by.trim();
        self.query.sort_by = if sort_by.is_empty() {
            "start_at".to_string()
        } else {
            sort_by.to_string()
        };
        self.query.sort_dir = sort_dir;
        self.query.offset = 0;
    }

    pub fn set_limit(&mut self, limit: u32) {
        self.query.limit = limit.max(1);
        self.query.offset = 0;
    }

    pub fn set_offset(&mut self, offset: u32) {
        self.query.offset = offset;
    }

    pub fn next_page(&mut self) {
        self.query.offset = self.query.offset.saturating_add(self.query.limit);
    }
}
