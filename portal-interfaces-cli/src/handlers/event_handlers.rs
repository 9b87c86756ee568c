use chrono::Utc;

use portal_application::filters::EventFilters;
use portal_application::queries::event_queries;
use portal_application::AppState;

use crate::error::CliError;
use crate::render::render_event_cards;
use crate::routes::EventListArgs;

pub async fn list_events(state: &AppState, args: &EventListArgs) -> Result<String, CliError> {
    let filters = build_filters(args, state.config.events_page_size);
    let cards = event_queries::list_event_cards(state, &filters, Utc::now()).await?;
    if args.json {
        return serde_json::to_string_pretty(&cards)
            .map(|text| text + "\n")
            .map_err(|err| CliError::Failed(format!("could not encode events: {err}")));
    }
    Ok(render_event_cards(&cards))
}

pub(crate) fn build_filters(args: &EventListArgs, default_limit: u32) -> EventFilters {
    let mut filters = EventFilters::new(args.limit.unwrap_or(default_limit));
    filters.set_text(args.q.clone());
    filters.set_status(args.status);
    filters.set_site(args.site);
    filters.set_upcoming_only(args.upcoming);
    if args.sort_by.is_some() || args.sort_dir.is_some() {
        filters.set_sort(
            args.sort_by.as_deref().unwrap_or("start_at"),
            args.sort_dir.unwrap_or_default(),
        );
    }
    filters.set_offset(args.offset);
    filters
}
