// List filter slices. Changing any filter other than the offset returns to
// the first page.
pub mod admin_filters;
pub mod event_filters;

pub use admin_filters::*;
pub use event_filters::*;

pub(crate) fn normalize_query_text(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
