// Editable form slices
pub mod admin_registration_form;
pub mod registration_form;

pub use admin_registration_form::*;
pub use registration_form::*;

use portal_domain::{ProxyEntry, PROXY_RELATIONS};

use crate::AppError;

pub(crate) fn validate_proxy_entries(entries: &[ProxyEntry]) -> Result<(), AppError> {
    for (idx, entry) in entries.iter().enumerate() {
        if !entry.has_name() {
            return Err(AppError::BadRequest(format!(
                "proxy entry {} needs a name",
                idx + 1
            )));
        }
        if let Some(relation) = entry.normalized().relation {
            if !PROXY_RELATIONS.contains(&relation.as_str()) {
                return Err(AppError::BadRequest(format!(
                    "proxy entry {} has unknown relation '{}', expected one of {}",
                    idx + 1,
                    relation,
                    PROXY_RELATIONS.join(", ")
                )));
            }
        }
    }
    Ok(())
}

pub(crate) fn entries_for_payload(is_proxy: bool, entries: &[ProxyEntry]) -> Vec<ProxyEntry> {
    if is_proxy {
        entries.iter().map(ProxyEntry::normalized).collect()
    } else {
        Vec::new()
    }
}

pub(crate) fn entries_for_editing(entries: &[ProxyEntry]) -> Vec<ProxyEntry> {
    if entries.is_empty() {
        vec![ProxyEntry::default()]
    } else {
        entries.to_vec()
    }
}
