// Event entity
// Represents a church event members can register for

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{EventId, EventStatus, SiteId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    pub start_at: DateTime<Utc>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    /// `None` means unlimited seats.
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub waitlist_enabled: bool,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub site_id: Option<SiteId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Desc
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<SiteId>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub upcoming_only: bool,
    pub sort_by: String,
    pub sort_dir: SortDirection,
    pub limit: u32,
    pub offset: u32,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            q: None,
            status: None,
            site_id: None,
            upcoming_only: false,
            sort_by: "start_at".to_string(),
            sort_dir: SortDirection::Desc,
            limit: 50,
            offset: 0,
        }
    }
}
