use std::fmt::Write;

use portal_application::commands::admin_registration_commands::{
    self, Confirmation, DeleteOutcome,
};
use portal_application::forms::AdminRegistrationForm;
use portal_application::queries::admin_registration_queries;
use portal_application::screens::AdminPanel;
use portal_application::AppState;
use portal_domain::{EventId, RegistrationId};

use crate::error::CliError;
use crate::render::render_admin_rows;
use crate::routes::{AdminEditArgs, AdminFilterArgs, AdminListArgs};

pub async fn list(state: &AppState, args: &AdminListArgs) -> Result<String, CliError> {
    let mut panel = panel_for(state, &args.filters, args.limit);
    let limit = panel.filters.limit();
    panel
        .filters
        .set_offset(args.page.saturating_sub(1).saturating_mul(limit));
    admin_registration_queries::refresh_admin_list(state, &mut panel).await?;
    Ok(render_admin_rows(panel.rows(), panel.filters.offset()))
}

pub async fn edit(state: &AppState, args: &AdminEditArgs) -> Result<String, CliError> {
    let mut panel = AdminPanel::new(args.event_id, state.config.admin_page_size);
    let edit =
        admin_registration_commands::open_admin_edit(state, &mut panel, args.registration_id)
            .await?;
    apply_edit_args(&mut edit.form, args)?;
    admin_registration_commands::save_admin_edit(state, &mut panel).await?;

    let mut out = String::new();
    let _ = writeln!(out, "{}", panel.message().unwrap_or("Registration updated"));
    if let Some(row) = panel.row(args.registration_id) {
        out.push_str(&render_admin_rows(std::slice::from_ref(row), 0));
    }
    Ok(out)
}

pub async fn delete(
    state: &AppState,
    event_id: EventId,
    registration_id: RegistrationId,
    confirmation: &dyn Confirmation,
) -> Result<String, CliError> {
    let mut panel = AdminPanel::new(event_id, state.config.admin_page_size);
    admin_registration_queries::refresh_admin_list(state, &mut panel).await?;
    let outcome = admin_registration_commands::delete_admin_registration(
        state,
        &mut panel,
        registration_id,
        confirmation,
    )
    .await?;
    Ok(match outcome {
        DeleteOutcome::Deleted => format!(
            "{}\n",
            panel.message().unwrap_or("Registration deleted")
        ),
        DeleteOutcome::Declined => "Nothing deleted.\n".to_string(),
    })
}

pub async fn export(state: &AppState, args: &AdminFilterArgs) -> Result<String, CliError> {
    let panel = panel_for(state, args, None);
    let path = admin_registration_commands::export_registrations(state, &panel).await?;
    Ok(format!("Exported to {}\n", path.display()))
}

fn panel_for(state: &AppState, args: &AdminFilterArgs, limit: Option<u32>) -> AdminPanel {
    let mut panel = AdminPanel::new(
        args.event_id,
        limit.unwrap_or(state.config.admin_page_size),
    );
    panel.filters.set_query(args.q.clone());
    panel.filters.set_status(args.status);
    panel
}

pub(crate) fn apply_edit_args(
    form: &mut AdminRegistrationForm,
    args: &AdminEditArgs,
) -> Result<(), CliError> {
    if let Some(status) = args.status {
        form.status = status;
    }
    if let Some(tickets) = args.tickets {
        form.set_ticket_count(tickets)?;
    }
    if args.no_proxy {
        form.is_proxy = false;
    } else if !args.proxies.is_empty() {
        form.is_proxy = true;
        form.proxy_entries = args.proxies.clone();
    }
    Ok(())
}
