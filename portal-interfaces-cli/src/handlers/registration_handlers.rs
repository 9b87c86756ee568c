use std::fmt::Write;

use chrono::Utc;

use portal_application::commands::registration_commands::{self, RegistrationEntry};
use portal_application::forms::RegistrationForm;
use portal_application::queries::{event_queries, registration_queries};
use portal_application::screens::RegistrationScreen;
use portal_application::AppState;
use portal_domain::EventId;

use super::auth_handlers;
use crate::error::CliError;
use crate::prompt::Terminal;
use crate::render::{render_registration, render_registrations, render_screen};
use crate::routes::RegisterArgs;

pub async fn register<T: Terminal>(
    state: &AppState,
    args: &RegisterArgs,
    terminal: &T,
) -> Result<String, CliError> {
    let now = Utc::now();
    let event = event_queries::find_event(state, args.event_id).await?;
    let mut out = String::new();
    let mut screen = match registration_commands::open_registration(state, event, now).await? {
        RegistrationEntry::Ready(screen) => screen,
        RegistrationEntry::NeedsLogin { event_id } => {
            terminal.notice("Please sign in to register.");
            let Some(outcome) = auth_handlers::sign_in_interactive(state, None, terminal).await?
            else {
                return Err(auth_handlers::cancelled(state).await);
            };
            out.push_str(&crate::render::render_user(&outcome.user));
            let target = outcome.resume.unwrap_or(event_id);
            ready_or_unauthenticated(
                registration_commands::resume_pending_registration(state, target, now).await?,
            )?
        }
    };

    apply_form_args(&mut screen.form, args);
    out.push_str(&submit(state, &mut screen).await?);
    Ok(out)
}

pub(crate) async fn continue_pending<T: Terminal>(
    state: &AppState,
    event_id: EventId,
    terminal: &T,
) -> Result<String, CliError> {
    let entry =
        registration_commands::resume_pending_registration(state, event_id, Utc::now()).await?;
    let mut screen = ready_or_unauthenticated(entry)?;
    let mut out = render_screen(&screen);
    if !terminal.confirm("Submit this registration now?") {
        let _ = writeln!(
            out,
            "Not submitted. Run `portal register {}` when ready.",
            event_id
        );
        return Ok(out);
    }
    out.push_str(&submit(state, &mut screen).await?);
    Ok(out)
}

pub async fn my_registrations(state: &AppState) -> Result<String, CliError> {
    let records = registration_queries::list_my_registrations(state).await?;
    Ok(render_registrations(&records))
}

async fn submit(state: &AppState, screen: &mut RegistrationScreen) -> Result<String, CliError> {
    let outcome = registration_commands::submit_registration(state, screen).await?;
    let mut out = String::new();
    let _ = writeln!(out, "{}", outcome.kind.message());
    out.push_str(&render_registration(&outcome.registration));
    Ok(out)
}

fn ready_or_unauthenticated(entry: RegistrationEntry) -> Result<RegistrationScreen, CliError> {
    match entry {
        RegistrationEntry::Ready(screen) => Ok(screen),
        RegistrationEntry::NeedsLogin { .. } => Err(CliError::Unauthenticated(
            "Please sign in first. Run `portal login` and try again.".to_string(),
        )),
    }
}

/// Applies `--proxy`/`--no-proxy`. Without either flag the form keeps what
/// was pre-filled from an existing registration.
pub(crate) fn apply_form_args(form: &mut RegistrationForm, args: &RegisterArgs) {
    if args.no_proxy {
        form.set_proxy(false);
    } else if !args.proxies.is_empty() {
        form.replace_proxy_entries(args.proxies.clone());
        form.set_proxy(true);
    }
}
