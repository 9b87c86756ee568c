// Registration entity
// One member's sign-up for one event, optionally on behalf of others

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::value_objects::{EventId, RegistrationId, RegistrationStatus, SiteId, UserId};

pub const PROXY_RELATIONS: [&str; 3] = ["friend", "family", "other"];

/// A person registered by proxy. Only `name` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyEntry {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub relation: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl ProxyEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: normalize_optional_text(self.phone.as_deref()),
            relation: normalize_optional_text(self.relation.as_deref())
                .map(|value| value.to_lowercase()),
            note: normalize_optional_text(self.note.as_deref()),
        }
    }
}

fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ProxyEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ProxyEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: RegistrationId,
    pub event_id: EventId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub status: RegistrationStatus,
    pub ticket_count: u32,
    #[serde(default)]
    pub is_proxy: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub proxy_entries: Vec<ProxyEntry>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminRegistration {
    #[serde(flatten)]
    pub registration: Registration,
    #[serde(default)]
    pub event_title: Option<String>,
    #[serde(default)]
    pub event_site_id: Option<SiteId>,
    #[serde(default)]
    pub event_start_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_full_name: Option<String>,
    #[serde(default)]
    pub user_phone: Option<String>,
    #[serde(default)]
    pub user_member_type: Option<String>,
    #[serde(default)]
    pub user_role: Option<String>,
}

impl AdminRegistration {
    pub fn id(&self) -> RegistrationId {
        self.registration.id
    }

    pub fn registrant_label(&self) -> String {
        self.user_full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.user_email.as_deref())
            .unwrap_or("-")
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationCreate {
    pub event_id: EventId,
    pub ticket_count: u32,
    pub is_proxy: bool,
    pub proxy_entries: Vec<ProxyEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationUpdate {
    pub ticket_count: u32,
    pub is_proxy: bool,
    pub proxy_entries: Vec<ProxyEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminRegistrationUpdate {
    pub ticket_count: u32,
    pub is_proxy: bool,
    pub status: RegistrationStatus,
    pub proxy_entries: Vec<ProxyEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminRegistrationQuery {
    pub event_id: EventId,
    pub limit: u32,
    pub offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RegistrationStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationExportQuery {
    pub event_id: EventId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RegistrationStatus>,
}
