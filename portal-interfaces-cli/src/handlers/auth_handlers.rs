use std::fmt::Write;

use tracing::info;

use portal_application::commands::auth_commands::{self, LoginOutcome};
use portal_application::{AppError, AppState};

use super::registration_handlers;
use crate::error::CliError;
use crate::prompt::Terminal;
use crate::render::render_user;

const LOGIN_ATTEMPTS: usize = 3;

pub async fn login<T: Terminal>(
    state: &AppState,
    email: Option<String>,
    terminal: &T,
) -> Result<String, CliError> {
    let Some(outcome) = sign_in_interactive(state, email, terminal).await? else {
        return Err(cancelled(state).await);
    };
    let mut out = render_user(&outcome.user);
    if let Some(event_id) = outcome.resume {
        let _ = writeln!(out, "Resuming your registration for event {}.", event_id);
        out.push_str(&registration_handlers::continue_pending(state, event_id, terminal).await?);
    }
    Ok(out)
}

pub async fn logout(state: &AppState) -> Result<String, CliError> {
    auth_commands::logout(state).await?;
    Ok("Signed out.\n".to_string())
}

pub async fn whoami(state: &AppState) -> Result<String, CliError> {
    let user = state.current_user().await?;
    Ok(render_user(&user))
}

/// Prompts for credentials until sign-in succeeds or the visitor gives up
/// with a blank answer (`None`). A failure that is not retried drops the
/// pending registration.
pub(crate) async fn sign_in_interactive<T: Terminal>(
    state: &AppState,
    mut email: Option<String>,
    terminal: &T,
) -> Result<Option<LoginOutcome>, CliError> {
    for attempt in 1..=LOGIN_ATTEMPTS {
        let Some((address, password)) = read_credentials(terminal, email.take())? else {
            return Ok(None);
        };
        match auth_commands::complete_login(state, &address, &password).await {
            Ok(outcome) => return Ok(Some(outcome)),
            Err(err @ (AppError::Rejected(_) | AppError::BadRequest(_)))
                if attempt < LOGIN_ATTEMPTS =>
            {
                info!(attempt, "sign-in rejected");
                terminal.notice(&err.user_message());
            }
            Err(err) => {
                auth_commands::abandon_login(state).await?;
                return Err(err.into());
            }
        }
    }
    Ok(None)
}

pub(crate) fn read_credentials<T: Terminal>(
    terminal: &T,
    email: Option<String>,
) -> Result<Option<(String, String)>, CliError> {
    let email = match email {
        Some(email) => email,
        None => terminal.ask("Email: ")?,
    };
    if email.trim().is_empty() {
        return Ok(None);
    }
    let password = terminal.ask_secret("Password: ")?;
    if password.is_empty() {
        return Ok(None);
    }
    Ok(Some((email.trim().to_string(), password)))
}

pub(crate) async fn cancelled(state: &AppState) -> CliError {
    if let Err(err) = auth_commands::abandon_login(state).await {
        return err.into();
    }
    CliError::Unauthenticated("Sign-in cancelled.".to_string())
}
